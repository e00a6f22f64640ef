/// Presentation metadata for a FAQ category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub icon: &'static str,
    pub icon_label: &'static str,
    pub tone: &'static str,
}

// Every known category currently shares one tone.
const TONE: &str = "tone-gold";

pub const FALLBACK_DESCRIPTOR: CategoryDescriptor = CategoryDescriptor {
    icon: "?",
    icon_label: "help",
    tone: TONE,
};

const DESCRIPTORS: &[(&str, CategoryDescriptor)] = &[
    (
        "PRODUCT & USAGE",
        CategoryDescriptor { icon: "⚗", icon_label: "flask", tone: TONE },
    ),
    (
        "ORDERING & PACKAGING",
        CategoryDescriptor { icon: "📦", icon_label: "package", tone: TONE },
    ),
    (
        "PAYMENT METHODS",
        CategoryDescriptor { icon: "💳", icon_label: "credit card", tone: TONE },
    ),
    (
        "SHIPPING & DELIVERY",
        CategoryDescriptor { icon: "🚚", icon_label: "truck", tone: TONE },
    ),
];

pub fn category_descriptor(category: &str) -> CategoryDescriptor {
    DESCRIPTORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, descriptor)| *descriptor)
        .unwrap_or(FALLBACK_DESCRIPTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_their_own_icon() {
        assert_eq!(category_descriptor("SHIPPING & DELIVERY").icon_label, "truck");
        assert_eq!(category_descriptor("PAYMENT METHODS").icon_label, "credit card");
    }

    #[test]
    fn unknown_or_differently_cased_categories_fall_back() {
        assert_eq!(category_descriptor("RETURNS"), FALLBACK_DESCRIPTOR);
        assert_eq!(category_descriptor("shipping & delivery"), FALLBACK_DESCRIPTOR);
    }
}
