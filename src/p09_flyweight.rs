// Pattern 9: Flyweight - Shared Tree Species in a Forest
// The factory guarantees at most one Tree per (kind, color) key; a forest
// stores positions plus shared handles rather than duplicated tree data.

use colored::Colorize;
use dashmap::DashMap;
use lazy_static::lazy_static;
use std::sync::Arc;

// ============================================================================
// Flyweight value and keyed factory
// ============================================================================

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct TreeKey {
    kind: String,
    color: String,
}

// Intrinsic state only; position is supplied by the caller at display time.
struct Tree {
    kind: String,
    color: String,
}

impl Tree {
    fn display(&self, x: i32, y: i32) -> String {
        format!(
            "Tree of type '{}' and color '{}' located at ({}, {})",
            self.kind, self.color, x, y
        )
    }
}

struct TreeFactory {
    // Sharded concurrent map; the entry API makes first-insert atomic, so
    // concurrent lookups for one key can never construct two instances.
    pool: DashMap<TreeKey, Arc<Tree>>,
}

impl TreeFactory {
    fn new() -> Self {
        Self {
            pool: DashMap::new(),
        }
    }

    fn get_tree(&self, kind: &str, color: &str) -> Arc<Tree> {
        let key = TreeKey {
            kind: kind.to_string(),
            color: color.to_string(),
        };
        let entry = self.pool.entry(key).or_insert_with(|| {
            Arc::new(Tree {
                kind: kind.to_string(),
                color: color.to_string(),
            })
        });
        Arc::clone(&entry)
    }

    fn pooled_count(&self) -> usize {
        self.pool.len()
    }
}

lazy_static! {
    // Process-scoped registry, retained for process lifetime.
    static ref SHARED_TREES: Arc<TreeFactory> = Arc::new(TreeFactory::new());
}

fn shared_factory() -> Arc<TreeFactory> {
    Arc::clone(&SHARED_TREES)
}

// ============================================================================
// Forest: client of the factory
// ============================================================================

struct Forest {
    factory: Arc<TreeFactory>,
    trees: Vec<(Arc<Tree>, i32, i32)>,
}

impl Forest {
    fn new() -> Self {
        Self::with_factory(shared_factory())
    }

    fn with_factory(factory: Arc<TreeFactory>) -> Self {
        Self {
            factory,
            trees: Vec::new(),
        }
    }

    fn plant_tree(&mut self, x: i32, y: i32, kind: &str, color: &str) {
        let tree = self.factory.get_tree(kind, color);
        self.trees.push((tree, x, y));
    }

    fn display_trees(&self) -> Vec<String> {
        self.trees
            .iter()
            .map(|(tree, x, y)| tree.display(*x, *y))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("{}", "=== Flyweight ===".bold());

    let mut forest = Forest::new();
    forest.plant_tree(1, 1, "Oak", "Green");
    forest.plant_tree(2, 3, "Pine", "Dark Green");
    forest.plant_tree(1, 2, "Oak", "Green"); // Reuses the Oak/Green instance
    forest.plant_tree(3, 1, "Pine", "Dark Green"); // Reuses Pine/Dark Green

    for line in forest.display_trees() {
        println!("{}", line);
    }
    println!(
        "Planted {} trees backed by {} shared instances",
        forest.trees.len(),
        forest.factory.pooled_count()
    );
}
