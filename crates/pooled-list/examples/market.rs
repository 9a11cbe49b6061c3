//! A small market browser driving a pooled list from the terminal.
//!
//! The owner keeps the full ingredient catalogue, filters and orders it, and
//! hands the result to the list. Clicking a row narrows the catalogue to the
//! clicked ingredient's type.
//!
//! Run with:
//! ```sh
//! RUST_LOG=pooled_list=debug cargo run --example market
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::Mutex;
use pooled_list::{
    Container, ItemView, LeadingSpacer, ListConfig, ListMode, Padding, PooledList, PooledView,
    Rect, ScrollHost, Signal, ViewFactory,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IngredientType {
    Fruit,
    Vegetable,
    Spice,
    Grain,
}

#[derive(Debug, Clone, PartialEq)]
struct Ingredient {
    name: String,
    kind: IngredientType,
    amount: u32,
    price: f32,
}

impl Ingredient {
    fn new(name: &str, kind: IngredientType, amount: u32, price: f32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            amount,
            price,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum OrderBy {
    Name,
    Amount,
    Price,
}

/// Owner-side filtering and ordering.
fn select(
    catalogue: &[Ingredient],
    name_filter: &str,
    kind: Option<IngredientType>,
    order: OrderBy,
) -> Vec<Ingredient> {
    let needle = name_filter.to_lowercase();
    let mut selected: Vec<Ingredient> = catalogue
        .iter()
        .filter(|i| i.name.to_lowercase().contains(&needle))
        .filter(|i| kind.is_none_or(|k| i.kind == k))
        .cloned()
        .collect();

    selected.sort_by(|a, b| match order {
        OrderBy::Name => a.name.cmp(&b.name),
        OrderBy::Amount => a.amount.cmp(&b.amount),
        OrderBy::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
    });
    selected
}

fn catalogue() -> Vec<Ingredient> {
    use IngredientType::*;
    vec![
        Ingredient::new("Apple", Fruit, 40, 0.45),
        Ingredient::new("Banana", Fruit, 25, 0.30),
        Ingredient::new("Cherry", Fruit, 300, 0.05),
        Ingredient::new("Date", Fruit, 60, 0.20),
        Ingredient::new("Fig", Fruit, 18, 0.90),
        Ingredient::new("Grape", Fruit, 500, 0.02),
        Ingredient::new("Kiwi", Fruit, 35, 0.40),
        Ingredient::new("Lemon", Fruit, 50, 0.35),
        Ingredient::new("Carrot", Vegetable, 80, 0.15),
        Ingredient::new("Leek", Vegetable, 12, 1.10),
        Ingredient::new("Onion", Vegetable, 90, 0.25),
        Ingredient::new("Pepper", Vegetable, 30, 0.80),
        Ingredient::new("Potato", Vegetable, 120, 0.20),
        Ingredient::new("Spinach", Vegetable, 15, 1.50),
        Ingredient::new("Cinnamon", Spice, 10, 2.40),
        Ingredient::new("Clove", Spice, 8, 3.10),
        Ingredient::new("Cumin", Spice, 14, 1.90),
        Ingredient::new("Nutmeg", Spice, 6, 2.80),
        Ingredient::new("Saffron", Spice, 2, 12.00),
        Ingredient::new("Barley", Grain, 45, 0.60),
        Ingredient::new("Oats", Grain, 70, 0.50),
        Ingredient::new("Rice", Grain, 200, 0.40),
        Ingredient::new("Wheat", Grain, 150, 0.35),
    ]
}

// =============================================================================
// Views
// =============================================================================

struct IngredientRow {
    model: Option<Ingredient>,
    active: bool,
    parent: Container,
    clicked: Signal<Ingredient>,
}

impl IngredientRow {
    fn label(&self) -> String {
        match &self.model {
            Some(i) => format!(
                "{:<10} {:<10} x{:<4} {:>6.2}",
                i.name,
                format!("{:?}", i.kind),
                i.amount,
                i.price
            ),
            None => String::from("<unbound>"),
        }
    }

    fn click(&self) {
        if let Some(model) = &self.model {
            self.clicked.emit(model.clone());
        }
    }
}

impl PooledView for IngredientRow {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_parent(&mut self, parent: Container) {
        self.parent = parent;
    }

    fn parent(&self) -> Container {
        self.parent
    }
}

impl ItemView<Ingredient> for IngredientRow {
    fn set_model(&mut self, model: Ingredient) {
        self.model = Some(model);
    }

    fn model(&self) -> Option<&Ingredient> {
        self.model.as_ref()
    }

    fn clicked(&self) -> &Signal<Ingredient> {
        &self.clicked
    }
}

struct RowFactory;

impl ViewFactory<IngredientRow> for RowFactory {
    fn create(&self, parent: Container) -> IngredientRow {
        IngredientRow {
            model: None,
            active: true,
            parent,
            clicked: Signal::new(),
        }
    }

    fn item_height(&self) -> f32 {
        24.0
    }
}

// =============================================================================
// Host
// =============================================================================

/// A scroll area that only tracks geometry.
struct TerminalHost {
    viewport: Rect,
    content_height: f32,
    offset: f32,
    spacer: LeadingSpacer,
}

impl TerminalHost {
    fn new(viewport_height: f32) -> Self {
        Self {
            viewport: Rect::new(0.0, 0.0, 480.0, viewport_height),
            content_height: 0.0,
            offset: 0.0,
            spacer: LeadingSpacer::NONE,
        }
    }

    fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport.height()).max(0.0)
    }
}

impl ScrollHost for TerminalHost {
    fn viewport_rect(&self) -> Rect {
        self.viewport
    }

    fn content_rect(&self) -> Rect {
        self.viewport
            .offset_y(-self.offset)
            .with_height(self.content_height)
    }

    fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    fn update_leading_spacer(&mut self, spacer: LeadingSpacer) {
        self.spacer = spacer;
    }
}

type MarketList = PooledList<Ingredient, IngredientRow, TerminalHost>;

fn print_window(title: &str, list: &MarketList) {
    let range = list.visible_range();
    println!(
        "-- {title}: rows {}..{} of {} (spacer {:.0}px) --",
        range.start,
        range.end,
        list.item_count(),
        list.host().spacer.extent
    );
    for row in list.active_views() {
        println!("   {}", row.label());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalogue = catalogue();
    let factory: Arc<dyn ViewFactory<IngredientRow>> = Arc::new(RowFactory);

    // Continuous list, ordered by price.
    let config = ListConfig::new()
        .with_spacing(4.0)
        .with_pool_capacity(6)
        .with_padding(Padding::new(0.0, 8.0));
    let mut list: MarketList = PooledList::new(config, factory.clone(), TerminalHost::new(100.0))?;

    let selection = Arc::new(Mutex::new(None));
    let selection_clone = selection.clone();
    list.item_clicked.connect(move |ingredient: &Ingredient| {
        println!(">> clicked {}", ingredient.name);
        *selection_clone.lock() = Some(ingredient.kind);
    });

    list.set_items(select(&catalogue, "", None, OrderBy::Price));
    print_window("by price", &list);

    list.host_mut().set_scroll_offset(130.0);
    list.on_scroll_changed();
    print_window("scrolled", &list);

    // Click the second visible row, then narrow the catalogue to its type.
    if let Some(row) = list.active_views().nth(1) {
        row.click();
    }
    let clicked_kind = selection.lock().take();
    if let Some(kind) = clicked_kind {
        list.set_items(select(&catalogue, "", Some(kind), OrderBy::Name));
        print_window(&format!("{kind:?} only"), &list);
    }

    // Paged list over a name filter.
    let config = ListConfig::new().with_mode(ListMode::Paged).with_spacing(4.0);
    let mut pages: MarketList = PooledList::new(config, factory, TerminalHost::new(84.0))?;
    pages.page_changed.connect(|&(page, count)| {
        println!(">> page {page} of {count}");
    });

    pages.set_items(select(&catalogue, "a", None, OrderBy::Amount));
    print_window("page", &pages);
    for _ in 1..pages.page_count().unwrap_or(1) {
        pages.jump_to_next_page();
        print_window("page", &pages);
    }
    pages.jump_to_first_page();

    Ok(())
}
