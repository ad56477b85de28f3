use sea_orm::{Database, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::prelude::*;
use crate::word;

pub async fn get_connection(url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(url).await
}

/// Every word in the `word` table, lowercased, in `id` order.
pub async fn fetch_words(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let words = Word::find()
        .order_by_asc(word::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|model| model.text.trim().to_lowercase())
        .filter(|text| !text.is_empty())
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, ConnectionTrait};

    use super::*;

    async fn memory_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        db.execute_unprepared("CREATE TABLE word (id INTEGER PRIMARY KEY, text TEXT NOT NULL)")
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_fetch_words_in_id_order() {
        let db = memory_db().await;
        db.execute_unprepared(
            "INSERT INTO word (id, text) VALUES (3, 'Cabana'), (1, ' Apple '), (2, 'banana')",
        )
        .await
        .unwrap();

        let words = fetch_words(&db).await.unwrap();
        assert_eq!(words, vec!["apple", "banana", "cabana"]);
    }

    #[tokio::test]
    async fn test_fetch_words_skips_blank_rows() {
        let db = memory_db().await;
        db.execute_unprepared("INSERT INTO word (id, text) VALUES (1, '  '), (2, 'Dog')")
            .await
            .unwrap();

        assert_eq!(fetch_words(&db).await.unwrap(), vec!["dog"]);
    }

    #[tokio::test]
    async fn test_empty_table() {
        let db = memory_db().await;
        assert!(fetch_words(&db).await.unwrap().is_empty());
    }
}
