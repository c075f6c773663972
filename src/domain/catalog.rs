//! The built-in food catalog.
//!
//! The catalog is a process-wide constant: it is assembled once on first access
//! and never mutated afterwards. Item order is significant, since ties in the
//! listing sort keep catalog order.

use super::food::{Category, CategoryKey, FoodItem, SectionTab};
use std::sync::OnceLock;

/// Read-only collection of food records, categories and header tabs.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<FoodItem>,
    categories: Vec<Category>,
    sections: Vec<SectionTab>,
}

impl Catalog {
    /// Builds a catalog from explicit parts.
    ///
    /// Used by tests and by anything that wants a listing over a different data set.
    #[must_use]
    pub fn new(items: Vec<FoodItem>, categories: Vec<Category>, sections: Vec<SectionTab>) -> Self {
        Self {
            items,
            categories,
            sections,
        }
    }

    /// Returns the built-in catalog shared by the whole process.
    ///
    /// # Example
    ///
    /// ```
    /// use foodgrid::domain::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.items().len(), 6);
    /// assert_eq!(catalog.categories()[0].label, "全部");
    /// ```
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            tracing::debug!("building built-in catalog");
            Self::new(builtin_items(), builtin_categories(), builtin_sections())
        })
    }

    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionTab] {
        &self.sections
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the display label for a category key.
    ///
    /// Falls back to the key token when the catalog carries no label for it.
    #[must_use]
    pub fn category_label(&self, key: CategoryKey) -> &str {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map_or(key.as_str(), |c| c.label.as_str())
    }
}

fn builtin_categories() -> Vec<Category> {
    let labels = [
        (CategoryKey::All, "全部"),
        (CategoryKey::Other, "其他美食"),
        (CategoryKey::Chinese, "中餐"),
        (CategoryKey::FastFood, "快餐简餐"),
        (CategoryKey::Hotpot, "火锅"),
        (CategoryKey::Cafe, "咖啡馆"),
        (CategoryKey::Bbq, "烧烤"),
        (CategoryKey::Snack, "小餐馆/小吃"),
        (CategoryKey::Fresh, "清真"),
        (CategoryKey::Dessert, "甜点"),
        (CategoryKey::Seafood, "海鲜"),
        (CategoryKey::Japanese, "日式料理"),
        (CategoryKey::Bar, "酒馆/酒吧/居酒屋"),
    ];
    labels
        .into_iter()
        .map(|(key, label)| Category::new(key, label))
        .collect()
}

fn builtin_sections() -> Vec<SectionTab> {
    vec![
        SectionTab::new("all", "全部(453308)"),
        SectionTab::new("spots", "景点(5377)"),
        SectionTab::new("food", "美食(167452)"),
        SectionTab::new("shopping", "购物(14597)"),
        SectionTab::new("activities", "活动(5253)"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    rating: f32,
    reviews: u32,
    description: &str,
    image_url: &str,
    category: CategoryKey,
    price: u32,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        reviews,
        description: description.to_string(),
        image_url: image_url.to_string(),
        category,
        price,
        default_favorite: false,
    }
}

fn builtin_items() -> Vec<FoodItem> {
    vec![
        item(
            "1",
            "玉林串串香",
            4.5,
            2420,
            "成都大众串串，味道就正常吧，很多连锁，还是推荐玉林路上的这家，单纯可以在玉林路接着吃别的",
            "https://images.unsplash.com/photo-1563245372-f21724e3856d",
            CategoryKey::Chinese,
            68,
        ),
        item(
            "2",
            "春熙路龙抄手",
            4.8,
            1834,
            "成都特色小吃，值得一试，传统风味，价格实惠",
            "https://images.unsplash.com/photo-1583032015879-e5022cb87c3b",
            CategoryKey::Snack,
            25,
        ),
        item(
            "3",
            "得劲儿火锅",
            4.6,
            3156,
            "成都本地连锁火锅，价格亲民，味道正宗，服务周到",
            "https://images.unsplash.com/photo-1569718212165-3a8278d5f624",
            CategoryKey::Hotpot,
            128,
        ),
        item(
            "4",
            "宽窄巷子张老二凉粉",
            4.3,
            952,
            "正宗川式凉粉，配料丰富，口感独特，游客必打卡",
            "https://images.unsplash.com/photo-1555126634-323283e090fa",
            CategoryKey::Snack,
            15,
        ),
        item(
            "5",
            "BLUE CARIBOU CAFE",
            4.7,
            628,
            "环境优雅，咖啡品质好，甜点可口，适合下午茶",
            "https://images.unsplash.com/photo-1554118811-1e0d58224f24",
            CategoryKey::Cafe,
            78,
        ),
        item(
            "6",
            "马路边边麻辣烫",
            4.4,
            1527,
            "怀旧风格装修，食材新鲜，特色麻辣烫，深受年轻人喜爱",
            "https://images.unsplash.com/photo-1569718212165-3a8278d5f624",
            CategoryKey::Chinese,
            45,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.items().len());
    }

    #[test]
    fn test_builtin_items_are_well_formed() {
        for item in Catalog::builtin().items() {
            assert!((0.0..=5.0).contains(&item.rating), "rating out of range: {}", item.id);
            assert_ne!(item.category, CategoryKey::All, "item tagged with sentinel: {}", item.id);
            assert!(!item.default_favorite);
        }
    }

    #[test]
    fn test_categories_follow_key_order() {
        let keys: Vec<CategoryKey> = Catalog::builtin().categories().iter().map(|c| c.key).collect();
        assert_eq!(keys, CategoryKey::ALL.to_vec());
    }

    #[test]
    fn test_find_and_labels() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("3").map(|i| i.name.as_str()), Some("得劲儿火锅"));
        assert!(catalog.find("42").is_none());
        assert_eq!(catalog.category_label(CategoryKey::Hotpot), "火锅");

        let bare = Catalog::new(vec![], vec![], vec![]);
        assert_eq!(bare.category_label(CategoryKey::Hotpot), "hotpot");
    }
}
