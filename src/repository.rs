//! Data access for the person table.

use crate::error::AppError;
use crate::model::{NewPerson, Person};
use sqlx::SqlitePool;

pub struct PersonRepository;

impl PersonRepository {
    /// Insert one person inside a transaction. The id is assigned by the
    /// database; returns the stored row.
    pub async fn persist(pool: &SqlitePool, new_person: &NewPerson) -> Result<Person, AppError> {
        let mut tx = pool.begin().await?;
        let person = sqlx::query_as::<_, Person>(
            "INSERT INTO person (name, age) VALUES (?, ?) RETURNING id, name, age",
        )
        .bind(&new_person.name)
        .bind(new_person.age)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(id = person.id, "persisted person");
        Ok(person)
    }

    /// All persons, in insertion order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Person>, AppError> {
        let persons = sqlx::query_as::<_, Person>("SELECT id, name, age FROM person ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(persons)
    }

    /// Persons whose name matches exactly.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Vec<Person>, AppError> {
        let persons = sqlx::query_as::<_, Person>(
            "SELECT id, name, age FROM person WHERE name = ? ORDER BY id",
        )
        .bind(name)
        .fetch_all(pool)
        .await?;
        Ok(persons)
    }

    /// Persons with age strictly greater than the threshold.
    pub async fn find_by_age_greater_than(
        pool: &SqlitePool,
        age: i32,
    ) -> Result<Vec<Person>, AppError> {
        let persons = sqlx::query_as::<_, Person>(
            "SELECT id, name, age FROM person WHERE age > ? ORDER BY id",
        )
        .bind(age)
        .fetch_all(pool)
        .await?;
        Ok(persons)
    }

    /// One person by primary key, or None when the id does not exist.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Person>, AppError> {
        let person = sqlx::query_as::<_, Person>("SELECT id, name, age FROM person WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_pool, ensure_schema};

    // Single connection so the in-memory database survives the whole test.
    async fn memory_pool() -> SqlitePool {
        let pool = connect_pool("sqlite::memory:", 1).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn persist_assigns_increasing_ids() {
        let pool = memory_pool().await;
        let first = PersonRepository::persist(
            &pool,
            &NewPerson {
                name: "Alice".into(),
                age: 30,
            },
        )
        .await
        .unwrap();
        let second = PersonRepository::persist(
            &pool,
            &NewPerson {
                name: "Bob".into(),
                age: 25,
            },
        )
        .await
        .unwrap();
        assert!(second.id > first.id);
        assert_eq!(first.name, "Alice");
        assert_eq!(first.age, 30);
    }

    #[tokio::test]
    async fn find_by_id_roundtrip() {
        let pool = memory_pool().await;
        let created = PersonRepository::persist(
            &pool,
            &NewPerson {
                name: "Alice".into(),
                age: 30,
            },
        )
        .await
        .unwrap();
        let fetched = PersonRepository::find_by_id(&pool, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn find_by_id_absent_is_none() {
        let pool = memory_pool().await;
        let fetched = PersonRepository::find_by_id(&pool, 12345).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn find_by_name_is_exact_and_case_sensitive() {
        let pool = memory_pool().await;
        for (name, age) in [("Alice", 30), ("alice", 31), ("Alice", 32)] {
            PersonRepository::persist(
                &pool,
                &NewPerson {
                    name: name.into(),
                    age,
                },
            )
            .await
            .unwrap();
        }
        let found = PersonRepository::find_by_name(&pool, "Alice").await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.name == "Alice"));
    }

    #[tokio::test]
    async fn find_by_age_greater_than_is_strict() {
        let pool = memory_pool().await;
        for (name, age) in [("Alice", 30), ("Bob", 25)] {
            PersonRepository::persist(
                &pool,
                &NewPerson {
                    name: name.into(),
                    age,
                },
            )
            .await
            .unwrap();
        }
        // Bob is exactly 25 and must not match a threshold of 25.
        let found = PersonRepository::find_by_age_greater_than(&pool, 25)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alice");
        let none = PersonRepository::find_by_age_greater_than(&pool, 30)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let pool = memory_pool().await;
        for (name, age) in [("Carol", 41), ("Alice", 30), ("Bob", 25)] {
            PersonRepository::persist(
                &pool,
                &NewPerson {
                    name: name.into(),
                    age,
                },
            )
            .await
            .unwrap();
        }
        let all = PersonRepository::list_all(&pool).await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }
}
