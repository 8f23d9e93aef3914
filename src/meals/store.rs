use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::nutrition::MacroSet;

/// One eating event. Immutable once appended; there is no delete.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    /// Wall-clock time of the meal, "HH:MM".
    pub time: String,
    pub macros: MacroSet,
}

impl Meal {
    pub fn new(name: impl Into<String>, time: impl Into<String>, macros: MacroSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            time: time.into(),
            macros,
        }
    }
}

/// Ordered, append-only list of the session's meals.
///
/// Shared across request handlers, so mutations go through a single writer
/// lock; readers get an owned snapshot and never hold the lock across awaits.
#[derive(Debug)]
pub struct MealStore {
    meals: RwLock<Vec<Meal>>,
}

impl MealStore {
    /// Store pre-populated with the two reference meals.
    pub fn seeded() -> Self {
        Self {
            meals: RwLock::new(vec![
                Meal::new(
                    "Breakfast",
                    "08:00",
                    MacroSet {
                        protein: 25.0,
                        carbs: 45.0,
                        fats: 12.0,
                        calories: 380.0,
                    },
                ),
                Meal::new(
                    "Lunch",
                    "12:30",
                    MacroSet {
                        protein: 40.0,
                        carbs: 60.0,
                        fats: 18.0,
                        calories: 550.0,
                    },
                ),
            ]),
        }
    }

    pub async fn append(&self, meal: Meal) {
        self.meals.write().await.push(meal);
    }

    pub async fn snapshot(&self) -> Vec<Meal> {
        self.meals.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_holds_two_meals_in_order() {
        let store = MealStore::seeded();
        let meals = store.snapshot().await;
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "Breakfast");
        assert_eq!(meals[0].time, "08:00");
        assert_eq!(meals[1].name, "Lunch");
        assert_eq!(meals[1].time, "12:30");
        assert_ne!(meals[0].id, meals[1].id);
    }

    #[tokio::test]
    async fn append_preserves_order_and_grows_by_one() {
        let store = MealStore::seeded();
        let meal = Meal::new("Dinner", "19:00", MacroSet::default());
        let id = meal.id;
        store.append(meal).await;

        let meals = store.snapshot().await;
        assert_eq!(meals.len(), 3);
        assert_eq!(meals[2].id, id);
    }
}
