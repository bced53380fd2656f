use std::rc::Rc;
use yew::prelude::*;

/// Project categories offered as filter tabs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    React,
    NextJs,
    BackendSystem,
    DashboardSystem,
}

impl Category {
    pub const TABS: [Category; 5] = [
        Category::All,
        Category::React,
        Category::NextJs,
        Category::BackendSystem,
        Category::DashboardSystem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::React => "React",
            Category::NextJs => "Next.js",
            Category::BackendSystem => "Backend System",
            Category::DashboardSystem => "Dashboard System",
        }
    }

    /// `All` matches everything; the others match their own label as a tag.
    pub fn matches(self, tags: &[&str]) -> bool {
        match self {
            Category::All => true,
            category => tags.contains(&category.label()),
        }
    }
}

pub trait Tagged {
    fn tags(&self) -> &[&'static str];
}

/// Items matching `category`, in input order.
pub fn filter_items<T: Tagged>(items: &[T], category: Category) -> Vec<&T> {
    items
        .iter()
        .filter(|item| category.matches(item.tags()))
        .collect()
}

pub enum FilterAction {
    Select(Category),
    ReleaseLock,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    active: Category,
    is_animating: bool,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            active: Category::All,
            is_animating: false,
        }
    }
}

impl CategoryFilter {
    pub fn active(&self) -> Category {
        self.active
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }
}

impl Reducible for CategoryFilter {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FilterAction::Select(category) if category == self.active || self.is_animating => self,
            FilterAction::Select(category) => {
                log::debug!("project filter -> {}", category.label());
                Rc::new(Self {
                    active: category,
                    is_animating: true,
                })
            }
            FilterAction::ReleaseLock if self.is_animating => Rc::new(Self {
                active: self.active,
                is_animating: false,
            }),
            FilterAction::ReleaseLock => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: usize,
        tags: Vec<&'static str>,
    }

    impl Tagged for Item {
        fn tags(&self) -> &[&'static str] {
            &self.tags
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, tags: vec!["React", "Next.js", "Dashboard System"] },
            Item { id: 2, tags: vec!["Backend System", "Node.js"] },
            Item { id: 3, tags: vec!["Next.js", "React", "Redis"] },
        ]
    }

    fn ids(filtered: Vec<&Item>) -> Vec<usize> {
        filtered.into_iter().map(|item| item.id).collect()
    }

    #[test]
    fn all_passes_everything_in_order() {
        assert_eq!(ids(filter_items(&items(), Category::All)), vec![1, 2, 3]);
    }

    #[test]
    fn category_keeps_matching_items_in_order() {
        let items = items();
        assert_eq!(ids(filter_items(&items, Category::React)), vec![1, 3]);
        assert_eq!(ids(filter_items(&items, Category::BackendSystem)), vec![2]);
        assert_eq!(ids(filter_items(&items, Category::DashboardSystem)), vec![1]);
    }

    #[test]
    fn selecting_takes_lock_and_locked_selection_is_ignored() {
        let state = Rc::new(CategoryFilter::default()).reduce(FilterAction::Select(Category::React));
        assert_eq!(state.active(), Category::React);
        assert!(state.is_animating());

        let state = state.reduce(FilterAction::Select(Category::NextJs));
        assert_eq!(state.active(), Category::React);

        let state = state
            .reduce(FilterAction::ReleaseLock)
            .reduce(FilterAction::Select(Category::NextJs));
        assert_eq!(state.active(), Category::NextJs);
    }

    #[test]
    fn selecting_active_category_is_a_no_op() {
        let state = Rc::new(CategoryFilter::default());
        let after = Rc::clone(&state).reduce(FilterAction::Select(Category::All));
        assert!(Rc::ptr_eq(&state, &after));
        assert!(!after.is_animating());
    }

    const TAGS: [&str; 6] = ["React", "Next.js", "Backend System", "Dashboard System", "Redis", "Docker"];

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        proptest::collection::vec(proptest::sample::subsequence(TAGS.to_vec(), 0..TAGS.len()), 0..10)
            .prop_map(|tag_sets| {
                tag_sets
                    .into_iter()
                    .enumerate()
                    .map(|(id, tags)| Item { id, tags })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn filter_is_exact_ordered_subset(items in arb_items(), tab in 0usize..Category::TABS.len()) {
            let category = Category::TABS[tab];
            let filtered = ids(filter_items(&items, category));
            let expected: Vec<usize> = items
                .iter()
                .filter(|item| category == Category::All || item.tags.contains(&category.label()))
                .map(|item| item.id)
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
