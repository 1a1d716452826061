use samcreative_core::{
    category_counts, project_by_id, CategoryFilter, DisplayKind, PORTFOLIO_CATALOG,
};

#[test]
fn catalog_has_six_projects_with_unique_ids() {
    assert_eq!(PORTFOLIO_CATALOG.len(), 6);
    let mut ids: Vec<u32> = PORTFOLIO_CATALOG.iter().map(|entry| entry.id).collect();
    ids.dedup();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn single_entries_have_one_image() {
    for entry in PORTFOLIO_CATALOG {
        assert!(!entry.images.is_empty(), "project {}", entry.id);
        if entry.display == DisplayKind::Single {
            assert_eq!(entry.images.len(), 1, "project {}", entry.id);
            assert!(!entry.is_slideshow());
        }
    }
}

#[test]
fn project_two_is_a_three_image_slideshow() {
    let entry = project_by_id(2).expect("project 2");
    assert_eq!(entry.title, "Luxury E-commerce Store");
    assert_eq!(entry.image_count(), 3);
    assert!(entry.is_slideshow());
    assert_eq!(entry.cover(), entry.images[0]);
}

#[test]
fn counts_are_derived_from_catalog() {
    let counts = category_counts();
    assert_eq!(counts[0], (CategoryFilter::All, 6));
    let total: usize = counts[1..].iter().map(|(_, count)| count).sum();
    assert_eq!(total, 6);
    let ecommerce = counts
        .iter()
        .find(|(filter, _)| filter.key() == "ecommerce")
        .map(|(_, count)| *count);
    assert_eq!(ecommerce, Some(2));
}
