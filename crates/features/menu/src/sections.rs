use brigade_domain::catalog::{MenuItem, MenuSection};
use fxhash::FxHashMap;
use tracing::debug;

/// A section together with the items listed under it.
#[derive(Debug)]
pub struct SectionListing<'a> {
    pub section: &'a MenuSection,
    pub items: Vec<&'a MenuItem>,
}

/// Groups `items` under their sections.
///
/// Sections are ordered by `position`, then name; items keep their input order. Items that
/// reference an unknown section are left out. With `available_only`, unavailable items are
/// skipped too.
#[must_use]
pub fn group_by_section<'a>(
    sections: &'a [MenuSection],
    items: &'a [MenuItem],
    available_only: bool,
) -> Vec<SectionListing<'a>> {
    let mut ordered: Vec<&MenuSection> = sections.iter().collect();
    ordered.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));

    let mut by_section: FxHashMap<u64, Vec<&MenuItem>> = FxHashMap::default();
    for item in items.iter().filter(|i| !available_only || i.available) {
        by_section.entry(item.section_id).or_default().push(item);
    }

    let listings: Vec<SectionListing<'a>> = ordered
        .into_iter()
        .map(|section| SectionListing {
            section,
            items: by_section.remove(&section.id).unwrap_or_default(),
        })
        .collect();

    if !by_section.is_empty() {
        debug!(orphans = by_section.values().map(Vec::len).sum::<usize>(), "Items without a known section");
    }

    listings
}
