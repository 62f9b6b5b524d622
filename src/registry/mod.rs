//! In-memory stand-in for the plotting library's object registry.
//!
//! Only histogram metadata is kept: names, titles, axis labels, binning and
//! line color. Bin contents are not modelled.

pub mod object;

pub use self::object::{Hist1D, Hist1DRecord, Hist2D, Hist2DRecord};

use crate::core::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Object {
    OneD(Hist1D),
    TwoD(Hist2D),
}

#[derive(Clone, Debug)]
struct Entry {
    name: String,
    object: Object,
}

/// Name keyed store of histogram objects, in creation order.
///
/// Creating an object under a name already in use replaces the old object,
/// which stays alive only through handles still held elsewhere. The
/// replacement counts as the newest object.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    // replaced entries leave a `None` behind until the next compaction
    slots: Vec<Option<Entry>>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry { slots: Vec::new(), index: HashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }

    pub fn names(&self) -> Vec<String> {
        self.entries().map(|e| e.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get_1d(&self, name: &str) -> Option<Hist1D> {
        match self.get(name).map(|e| &e.object) {
            Some(&Object::OneD(ref h)) => Some(h.clone()),
            _ => None,
        }
    }

    pub fn get_2d(&self, name: &str) -> Option<Hist2D> {
        match self.get(name).map(|e| &e.object) {
            Some(&Object::TwoD(ref h)) => Some(h.clone()),
            _ => None,
        }
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).and_then(|&i| self.slots[i].as_ref())
    }

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    fn insert(&mut self, name: &str, object: Object) {
        if let Some(old) = self.index.remove(name) {
            warn!("replacing existing histogram {}", name);
            self.slots[old] = None;
        }
        self.index.insert(name.to_string(), self.slots.len());
        self.slots.push(Some(Entry { name: name.to_string(), object }));
        if self.slots.len() > 2 * self.index.len() + 16 {
            self.compact();
        }
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        self.index.clear();
        for (i, entry) in self.slots.iter().enumerate() {
            if let Some(ref e) = *entry {
                self.index.insert(e.name.clone(), i);
            }
        }
    }
}

impl HistogramBackend for Registry {
    type Hist1D = Hist1D;
    type Hist2D = Hist2D;

    fn create_1d(&mut self, name: &str, title: &str, x_bins: &BinSettings) -> Hist1D {
        let hist = Hist1D::new(name, title, x_bins);
        self.insert(name, Object::OneD(hist.clone()));
        hist
    }

    fn create_2d(&mut self, name: &str, title: &str, x_bins: &BinSettings, y_bins: &BinSettings) -> Hist2D {
        let hist = Hist2D::new(name, title, x_bins, y_bins);
        self.insert(name, Object::TwoD(hist.clone()));
        hist
    }
}
