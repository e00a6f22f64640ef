use std::collections::BTreeSet;
use std::rc::Rc;

use serde::Deserialize;

use crate::components::category_meta::{category_descriptor, CategoryDescriptor};
use crate::models::remote::Remote;

pub const LOAD_FAILED_NOTICE: &str =
    "We couldn't load our FAQs right now. Please reach out to us directly.";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: String,
    pub category: String,
    pub question: String,
    pub answer: String,
}

/// Body of `GET /api/faqs`.
#[derive(Deserialize, Debug)]
pub struct FaqPayload {
    pub faqs: Vec<FaqEntry>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Entries plus the ordered, duplicate-free category list they are grouped by.
#[derive(Clone, Debug, PartialEq)]
pub struct FaqData {
    faqs: Vec<FaqEntry>,
    categories: Vec<String>,
}

impl FaqData {
    /// Empty `categories` means "derive them from the entries".
    pub fn new(faqs: Vec<FaqEntry>, categories: Vec<String>) -> Self {
        let categories = if categories.is_empty() {
            unique_in_order(faqs.iter().map(|faq| faq.category.as_str()))
        } else {
            unique_in_order(categories.iter().map(String::as_str))
        };
        FaqData { faqs, categories }
    }

    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_entry(&self, id: &str) -> bool {
        self.faqs.iter().any(|faq| faq.id == id)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

impl From<FaqPayload> for FaqData {
    fn from(payload: FaqPayload) -> Self {
        FaqData::new(payload.faqs, payload.categories)
    }
}

fn unique_in_order<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    labels
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}

/// Ids of expanded entries. Never mutated in place: every change yields a new value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpenItems(Rc<BTreeSet<String>>);

impl OpenItems {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn toggled(&self, id: &str) -> Self {
        let mut next = (*self.0).clone();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        OpenItems(Rc::new(next))
    }

    pub fn opened(&self, id: &str) -> Self {
        if self.contains(id) {
            return self.clone();
        }
        self.toggled(id)
    }

    /// Drops ids that no longer exist in `data`.
    pub fn retain_known(&self, data: &FaqData) -> Self {
        if self.0.iter().all(|id| data.has_entry(id)) {
            return self.clone();
        }
        let kept = self
            .0
            .iter()
            .filter(|id| data.has_entry(id))
            .cloned()
            .collect();
        OpenItems(Rc::new(kept))
    }
}

/// Per-view UI state: the category filter and the expanded entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaqSelection {
    pub active_category: Option<String>,
    pub open_items: OpenItems,
}

impl FaqSelection {
    pub fn select_category(&self, category: Option<String>) -> Self {
        FaqSelection {
            active_category: category,
            open_items: self.open_items.clone(),
        }
    }

    pub fn toggle_entry(&self, id: &str) -> Self {
        FaqSelection {
            active_category: self.active_category.clone(),
            open_items: self.open_items.toggled(id),
        }
    }

    pub fn open_entry(&self, id: &str) -> Self {
        FaqSelection {
            active_category: self.active_category.clone(),
            open_items: self.open_items.opened(id),
        }
    }

    /// Brings the selection back in line with freshly delivered data.
    pub fn reconcile(&self, data: &FaqData) -> Self {
        let active_category = self
            .active_category
            .clone()
            .filter(|category| data.has_category(category));
        FaqSelection {
            active_category,
            open_items: self.open_items.retain_known(data),
        }
    }
}

/// One category heading and its entries, in data-source order.
#[derive(Debug, PartialEq)]
pub struct FaqGroup<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a FaqEntry>,
}

pub fn visible_groups<'a>(data: &'a FaqData, active: Option<&'a str>) -> Vec<FaqGroup<'a>> {
    let categories: Vec<&str> = match active {
        Some(category) => vec![category],
        None => data.categories.iter().map(String::as_str).collect(),
    };

    categories
        .into_iter()
        .map(|category| FaqGroup {
            category,
            entries: data
                .faqs
                .iter()
                .filter(|faq| faq.category == category)
                .collect(),
        })
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct RowOutline<'a> {
    pub id: &'a str,
    pub question: &'a str,
    /// Present only while the entry is expanded.
    pub answer: Option<&'a str>,
}

#[derive(Debug, PartialEq)]
pub struct GroupOutline<'a> {
    pub category: &'a str,
    pub descriptor: CategoryDescriptor,
    pub rows: Vec<RowOutline<'a>>,
}

/// What the FAQ page shows, independent of markup.
#[derive(Debug, PartialEq)]
pub enum FaqOutline<'a> {
    Loading,
    Ready {
        groups: Vec<GroupOutline<'a>>,
        notice: Option<&'static str>,
    },
}

pub fn outline<'a>(faqs: &'a Remote<Rc<FaqData>>, selection: &'a FaqSelection) -> FaqOutline<'a> {
    let data = match faqs {
        Remote::Loading => return FaqOutline::Loading,
        Remote::Failed(_) => {
            return FaqOutline::Ready {
                groups: Vec::new(),
                notice: Some(LOAD_FAILED_NOTICE),
            }
        }
        Remote::Loaded(data) => data,
    };

    let groups = visible_groups(data, selection.active_category.as_deref())
        .into_iter()
        .map(|group| GroupOutline {
            category: group.category,
            descriptor: category_descriptor(group.category),
            rows: group
                .entries
                .into_iter()
                .map(|faq| RowOutline {
                    id: &faq.id,
                    question: &faq.question,
                    answer: selection
                        .open_items
                        .contains(&faq.id)
                        .then_some(faq.answer.as_str()),
                })
                .collect(),
        })
        .collect();

    FaqOutline::Ready { groups, notice: None }
}

/// Initial filter from a `?category=` query value; unlisted values mean "all".
pub fn resolve_category(param: Option<&str>, data: &FaqData) -> Option<String> {
    param
        .filter(|category| data.has_category(category))
        .map(str::to_string)
}

/// Entry id addressed by a `#fragment`, if it names a loaded entry.
pub fn entry_from_fragment(fragment: &str, data: &FaqData) -> Option<String> {
    let raw = fragment.trim_start_matches('#');
    if raw.is_empty() {
        return None;
    }
    let id = urlencoding::decode(raw).ok()?.into_owned();
    data.has_entry(&id).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn entry(id: &str, category: &str, question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            id: id.to_string(),
            category: category.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn loaded(faqs: Vec<FaqEntry>, categories: &[&str]) -> Remote<Rc<FaqData>> {
        let categories = categories.iter().map(|c| c.to_string()).collect();
        Remote::Loaded(Rc::new(FaqData::new(faqs, categories)))
    }

    fn store() -> FaqData {
        FaqData::new(
            vec![
                entry("ship-1", "SHIPPING & DELIVERY", "How long?", "3-5 days."),
                entry("pay-1", "PAYMENT METHODS", "GCash?", "Yes."),
                entry("ship-2", "SHIPPING & DELIVERY", "Tracking?", "By SMS."),
                entry("prod-1", "PRODUCT & USAGE", "Storage?", "Refrigerate."),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn categories_are_derived_in_first_appearance_order() {
        assert_eq!(
            store().categories(),
            &["SHIPPING & DELIVERY", "PAYMENT METHODS", "PRODUCT & USAGE"]
        );
    }

    #[test]
    fn supplied_categories_keep_their_order_without_duplicates() {
        let data = FaqData::new(
            vec![entry("a", "X", "Q", "A")],
            vec!["Y".into(), "X".into(), "Y".into()],
        );
        assert_eq!(data.categories(), &["Y", "X"]);
    }

    #[test]
    fn payload_without_categories_deserializes() {
        let payload: FaqPayload = serde_json::from_str(
            r#"{"faqs":[{"id":"a","category":"X","question":"Q1","answer":"A1"}]}"#,
        )
        .unwrap();
        let data = FaqData::from(payload);
        assert_eq!(data.categories(), &["X"]);
        assert!(data.has_entry("a"));
    }

    #[test]
    fn toggling_returns_a_new_set_and_leaves_the_old_one_alone() {
        let before = OpenItems::default();
        let after = before.toggled("a");
        assert_eq!(before.len(), 0);
        assert!(after.contains("a"));
        assert_eq!(after.toggled("a"), before);
    }

    #[test]
    fn single_entry_disclosure_cycle() {
        let faqs = loaded(vec![entry("a", "X", "Q1", "A1")], &["X"]);
        let mut selection = FaqSelection::default();

        let row = |selection: &FaqSelection| match outline(&faqs, selection) {
            FaqOutline::Ready { mut groups, .. } => {
                let mut group = groups.remove(0);
                let row = group.rows.remove(0);
                (row.question.to_string(), row.answer.map(str::to_string))
            }
            FaqOutline::Loading => panic!("data is loaded"),
        };

        assert_eq!(row(&selection), ("Q1".to_string(), None));
        selection = selection.toggle_entry("a");
        assert_eq!(row(&selection), ("Q1".to_string(), Some("A1".to_string())));
        selection = selection.toggle_entry("a");
        assert_eq!(row(&selection), ("Q1".to_string(), None));
    }

    #[test]
    fn selecting_a_category_renders_only_its_group() {
        let faqs = loaded(
            vec![
                entry("x1", "X", "Qx", "Ax"),
                entry("y1", "Y", "Qy1", "Ay1"),
                entry("y2", "Y", "Qy2", "Ay2"),
            ],
            &["X", "Y"],
        );
        let selection = FaqSelection::default().select_category(Some("Y".into()));

        let FaqOutline::Ready { groups, notice } = outline(&faqs, &selection) else {
            panic!("data is loaded");
        };
        assert_eq!(notice, None);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Y");
        let questions: Vec<_> = groups[0].rows.iter().map(|r| r.question).collect();
        assert_eq!(questions, vec!["Qy1", "Qy2"]);
    }

    #[test]
    fn selecting_the_same_category_twice_changes_nothing() {
        let once = FaqSelection::default()
            .toggle_entry("pay-1")
            .select_category(Some("PAYMENT METHODS".into()));
        let twice = once.select_category(Some("PAYMENT METHODS".into()));
        assert_eq!(twice, once);
        assert!(twice.open_items.contains("pay-1"));
    }

    #[test]
    fn loading_shows_nothing_but_the_indicator() {
        let selection = FaqSelection::default()
            .select_category(Some("X".into()))
            .toggle_entry("a");
        assert_eq!(outline(&Remote::Loading, &selection), FaqOutline::Loading);
    }

    #[test]
    fn failed_load_renders_notice_without_groups() {
        let faqs = Remote::Failed("HTTP 502".into());
        assert_eq!(
            outline(&faqs, &FaqSelection::default()),
            FaqOutline::Ready { groups: Vec::new(), notice: Some(LOAD_FAILED_NOTICE) }
        );
    }

    #[test]
    fn empty_list_renders_no_groups() {
        let faqs = loaded(Vec::new(), &[]);
        let selection = FaqSelection::default();
        let FaqOutline::Ready { groups, .. } = outline(&faqs, &selection) else {
            panic!("data is loaded");
        };
        assert!(groups.is_empty());
    }

    #[test]
    fn unknown_category_is_an_empty_group_not_an_error() {
        let data = store();
        let groups = visible_groups(&data, Some("RETURNS"));
        assert_eq!(groups, vec![FaqGroup { category: "RETURNS", entries: Vec::new() }]);
    }

    #[test]
    fn entries_keep_source_order_within_a_group() {
        let data = store();
        let groups = visible_groups(&data, None);
        let ids: Vec<_> = groups[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ship-1", "ship-2"]);
    }

    #[test]
    fn reconcile_drops_stale_ids_and_unlisted_filters() {
        let selection = FaqSelection::default()
            .toggle_entry("ship-1")
            .toggle_entry("gone")
            .select_category(Some("RETURNS".into()));
        let reconciled = selection.reconcile(&store());
        assert_eq!(reconciled.active_category, None);
        assert!(reconciled.open_items.contains("ship-1"));
        assert!(!reconciled.open_items.contains("gone"));
        assert_eq!(reconciled.open_items.len(), 1);
    }

    #[test]
    fn query_category_must_be_listed() {
        let data = store();
        assert_eq!(
            resolve_category(Some("PAYMENT METHODS"), &data),
            Some("PAYMENT METHODS".to_string())
        );
        assert_eq!(resolve_category(Some("payment methods"), &data), None);
        assert_eq!(resolve_category(None, &data), None);
    }

    #[test]
    fn fragment_opens_only_known_entries() {
        let data = store();
        assert_eq!(entry_from_fragment("#pay-1", &data), Some("pay-1".to_string()));
        assert_eq!(entry_from_fragment("#nope", &data), None);
        assert_eq!(entry_from_fragment("#", &data), None);
        assert_eq!(entry_from_fragment("", &data), None);
    }

    #[test]
    fn opening_an_open_entry_keeps_it_open() {
        let selection = FaqSelection::default().open_entry("a").open_entry("a");
        assert!(selection.open_items.contains("a"));
    }

    proptest! {
        #[test]
        fn membership_follows_toggle_parity(
            calls in proptest::collection::vec(0usize..4, 0..40),
        ) {
            let ids = ["a", "b", "c", "d"];
            let mut open = OpenItems::default();
            for &i in &calls {
                open = open.toggled(ids[i]);
            }
            for (i, id) in ids.iter().enumerate() {
                let count = calls.iter().filter(|&&c| c == i).count();
                prop_assert_eq!(open.contains(id), count % 2 == 1);
            }
        }

        #[test]
        fn all_view_partitions_entries_by_category(
            cats in proptest::collection::vec(0usize..3, 0..30),
        ) {
            let labels = ["X", "Y", "Z"];
            let faqs: Vec<FaqEntry> = cats
                .iter()
                .enumerate()
                .map(|(n, &c)| entry(&format!("e{n}"), labels[c], "Q", "A"))
                .collect();
            let data = FaqData::new(faqs, Vec::new());

            let all: Vec<&str> = visible_groups(&data, None)
                .iter()
                .flat_map(|g| g.entries.iter().map(|e| e.id.as_str()))
                .collect();
            let per_category: usize = data
                .categories()
                .iter()
                .map(|c| visible_groups(&data, Some(c.as_str()))[0].entries.len())
                .sum();

            let distinct: BTreeSet<&str> = all.iter().copied().collect();
            prop_assert_eq!(all.len(), data.faqs().len());
            prop_assert_eq!(distinct.len(), all.len());
            prop_assert_eq!(per_category, all.len());
        }
    }
}
