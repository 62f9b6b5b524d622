use crate::core::*;
use crate::registry::Registry;
use crate::st::HistogramFactory;

#[test]
fn create_and_look_up() {
    let mut r = Registry::new();
    assert!(r.is_empty());
    let h1 = r.create_1d("a", "A", &BinSettings::with_bins(3));
    let h2 = r.create_2d("b", "B", &BinSettings::with_bins(3), &BinSettings::with_bins(4));
    assert_eq!(2, r.len());
    assert_eq!(vec!["a", "b"], r.names());
    assert!(r.get_1d("a").unwrap().same_object(&h1));
    assert!(r.get_2d("b").unwrap().same_object(&h2));
    assert!(r.get_2d("a").is_none());
    assert!(r.get_1d("b").is_none());
    assert!(r.get_1d("c").is_none());
    assert!(r.contains("a"));
    assert!(!r.contains("c"));
}

#[test]
fn new_objects_have_no_labels_or_color() {
    let mut r = Registry::new();
    let h = r.create_1d("a", "A", &BinSettings::new(2, 0.0, 1.0));
    assert_eq!("A", h.title());
    assert_eq!("", h.x_title());
    assert_eq!("", h.y_title());
    assert_eq!(None, h.line_color());
    assert_eq!(BinSettings::new(2, 0.0, 1.0), h.x_bins());
}

#[test]
fn duplicate_name_replaces() {
    let mut r = Registry::new();
    let old = r.create_1d("a", "old", &BinSettings::default());
    r.create_1d("b", "B", &BinSettings::default());
    let new = r.create_2d("a", "new", &BinSettings::default(), &BinSettings::default());
    assert_eq!(2, r.len());
    assert_eq!(vec!["b", "a"], r.names());
    assert!(r.get_1d("a").is_none());
    assert!(r.get_2d("a").unwrap().same_object(&new));
    // the old handle still works, it is just no longer registered
    assert_eq!("old", old.title());
}

#[test]
fn clear_drops_everything() {
    let mut r = Registry::new();
    r.create_1d("a", "A", &BinSettings::default());
    r.clear();
    assert!(r.is_empty());
    assert!(r.get_1d("a").is_none());
}

#[test]
fn handle_mutators() {
    let mut r = Registry::new();
    let mut h = r.create_2d("a", "A", &BinSettings::default(), &BinSettings::with_bins(5));
    h.set_title("T");
    h.set_x_title("X");
    h.set_y_title("Y");
    let rec = r.get_2d("a").unwrap().record();
    assert_eq!(("T", "X", "Y"), (rec.title.as_str(), rec.x_title.as_str(), rec.y_title.as_str()));
    assert_eq!(5, rec.y_bins.bins());
}

#[test]
fn many_objects_keep_order_and_lookups() {
    const COUNT: usize = 20_000;
    let mut f = HistogramFactory::new("big", Registry::new());
    for _ in 0..COUNT {
        f.make_1d("t", "x", "y", &BinSettings::default(), "");
    }
    let r = f.backend();
    assert_eq!(COUNT, r.len());
    let names = r.names();
    assert_eq!("big_0", names[0]);
    assert_eq!(format!("big_{}", COUNT - 1), names[COUNT - 1]);
    for i in (0..COUNT).step_by(997) {
        let name = format!("big_{}", i);
        assert!(r.contains(&name));
        assert_eq!(name, r.get_1d(&name).unwrap().name());
        assert!(r.get_2d(&name).is_none());
    }
    assert!(!r.contains(&format!("big_{}", COUNT)));
}

#[test]
fn repeated_replacement_among_many() {
    let mut r = Registry::new();
    for i in 0..1000 {
        r.create_1d(&format!("h{}", i), "t", &BinSettings::default());
    }
    let mut last = None;
    for round in 0..500 {
        let hist = r.create_1d(&format!("h{}", round % 10), "again", &BinSettings::default());
        last = Some(hist);
    }
    assert_eq!(1000, r.len());
    let names = r.names();
    // untouched objects keep their place, replaced ones move to the end
    assert_eq!("h10", names[0]);
    assert_eq!("h999", names[989]);
    let tail: Vec<&str> = names[990..].iter().map(String::as_str).collect();
    assert_eq!(vec!["h0", "h1", "h2", "h3", "h4", "h5", "h6", "h7", "h8", "h9"], tail);
    for i in 0..10 {
        assert_eq!("again", r.get_1d(&format!("h{}", i)).unwrap().title());
    }
    assert!(r.get_1d("h9").unwrap().same_object(&last.unwrap()));
    assert_eq!("t", r.get_1d("h500").unwrap().title());
}

#[test]
fn replacement_after_clear() {
    let mut r = Registry::new();
    r.create_1d("a", "A", &BinSettings::default());
    r.create_1d("b", "B", &BinSettings::default());
    r.clear();
    r.create_2d("a", "A2", &BinSettings::default(), &BinSettings::default());
    r.create_2d("a", "A3", &BinSettings::default(), &BinSettings::default());
    assert_eq!(vec!["a"], r.names());
    assert_eq!("A3", r.get_2d("a").unwrap().title());
}
