use companies_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|val| val.id() == val_id).cloned()
}

/// Every item in the collection ordered by id
pub fn find_all<T: Clone + Entity>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = collection.clone();
    items.sort_by_key(|item| *item.id());
    items
}
