//! Database tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ObservationSource;
    use rusqlite::params;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn new_user(db: &Database, email: &str) -> i64 {
        db.add_user(&NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            status: UserStatus::Active,
        })
        .unwrap()
    }

    fn new_expense(user_id: i64, d: &str, amount: &str) -> NewExpense {
        NewExpense {
            user_id,
            category_id: None,
            amount: amount.parse().unwrap(),
            date: date(d),
            description: None,
        }
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        assert!(db.list_users().unwrap().is_empty());
        assert!(db.list_categories().unwrap().is_empty());
        assert!(db.list_observations().unwrap().is_empty());
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let db = Database::in_memory().unwrap();
        new_user(&db, "a@example.com");

        let reopened = Database::new(db.path()).unwrap();
        assert_eq!(reopened.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_user_crud() {
        let db = Database::in_memory().unwrap();
        let id = db
            .add_user(&NewUser {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                status: UserStatus::Inactive,
            })
            .unwrap();
        assert!(id > 0);

        let user = db.get_user(id).unwrap().unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.status, UserStatus::Inactive);

        assert!(db.get_user(id + 100).unwrap().is_none());
        assert_eq!(db.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let db = Database::in_memory().unwrap();
        new_user(&db, "same@example.com");
        let result = db.add_user(&NewUser {
            name: "Other".to_string(),
            email: "same@example.com".to_string(),
            status: UserStatus::Active,
        });
        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[test]
    fn test_categories() {
        let db = Database::in_memory().unwrap();
        let food = db.add_category("Food").unwrap();
        db.add_category("Bills").unwrap();

        let categories = db.list_categories().unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bills", "Food"]);
        assert!(categories.iter().any(|c| c.id == food));
    }

    #[test]
    fn test_expense_crud() {
        let db = Database::in_memory().unwrap();
        let user = new_user(&db, "crud@example.com");
        let category = db.add_category("Travel").unwrap();

        let id = db
            .add_expense(&NewExpense {
                user_id: user,
                category_id: Some(category),
                amount: "19.99".parse().unwrap(),
                date: date("2024-02-14"),
                description: Some("Train".to_string()),
            })
            .unwrap();

        let expense = db.get_expense(id).unwrap().unwrap();
        assert_eq!(expense.amount.to_string(), "19.99");
        assert_eq!(expense.date, date("2024-02-14"));
        assert_eq!(expense.category_id, Some(category));
        assert_eq!(expense.description.as_deref(), Some("Train"));

        let updated = db
            .update_expense(id, &new_expense(user, "2024-02-15", "25.00"))
            .unwrap();
        assert_eq!(updated, 1);
        let expense = db.get_expense(id).unwrap().unwrap();
        assert_eq!(expense.amount, "25".parse::<Decimal>().unwrap());
        assert_eq!(expense.category_id, None);

        assert_eq!(
            db.update_expense(id + 100, &new_expense(user, "2024-02-15", "1"))
                .unwrap(),
            0
        );

        assert_eq!(db.delete_expense(id).unwrap(), 1);
        assert_eq!(db.delete_expense(id).unwrap(), 0);
        assert!(db.get_expense(id).unwrap().is_none());
    }

    #[test]
    fn test_expense_requires_existing_user() {
        let db = Database::in_memory().unwrap();
        let result = db.add_expense(&new_expense(999, "2024-01-01", "5"));
        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[test]
    fn test_list_expenses_filters() {
        let db = Database::in_memory().unwrap();
        let alice = new_user(&db, "alice@example.com");
        let bob = new_user(&db, "bob@example.com");
        let food = db.add_category("Food").unwrap();

        db.add_expense(&new_expense(alice, "2024-01-31", "10")).unwrap();
        db.add_expense(&NewExpense {
            category_id: Some(food),
            ..new_expense(alice, "2024-02-01", "20")
        })
        .unwrap();
        db.add_expense(&new_expense(alice, "2024-01-01", "30")).unwrap();
        db.add_expense(&new_expense(bob, "2024-01-15", "40")).unwrap();

        let all = db.list_expenses(&ExpenseFilter::new()).unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].date <= w[1].date));

        let alice_only = db
            .list_expenses(&ExpenseFilter::new().user_id(Some(alice)))
            .unwrap();
        assert_eq!(alice_only.len(), 3);

        let january = db
            .list_expenses(
                &ExpenseFilter::new()
                    .user_id(Some(alice))
                    .start_date(Some(date("2024-01-01")))
                    .end_date(Some(date("2024-01-31"))),
            )
            .unwrap();
        let amounts: Vec<String> = january.iter().map(|e| e.amount.to_string()).collect();
        assert_eq!(amounts, vec!["30", "10"]);

        let by_category = db
            .list_expenses(&ExpenseFilter::new().category_id(Some(food)))
            .unwrap();
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].date, date("2024-02-01"));
    }

    #[test]
    fn test_deleting_user_cascades_expenses() {
        let db = Database::in_memory().unwrap();
        let user = new_user(&db, "gone@example.com");
        db.add_expense(&new_expense(user, "2024-01-01", "5")).unwrap();

        let conn = db.conn().unwrap();
        conn.execute("DELETE FROM users WHERE id = ?", params![user])
            .unwrap();
        drop(conn);

        assert!(db.list_observations().unwrap().is_empty());
    }

    #[test]
    fn test_list_observations() {
        let db = Database::in_memory().unwrap();
        let user = new_user(&db, "obs@example.com");
        db.add_expense(&new_expense(user, "2024-01-05", "100.10"))
            .unwrap();
        db.add_expense(&new_expense(user, "2024-01-05", "49.90"))
            .unwrap();

        let mut observations = db.list_observations().unwrap();
        observations.sort_by_key(|o| o.amount);
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].user_id, user);
        assert_eq!(observations[0].date, date("2024-01-05"));
        assert_eq!(observations[0].amount, "49.90".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_malformed_amount_is_invalid_data() {
        let db = Database::in_memory().unwrap();
        let user = new_user(&db, "bad@example.com");
        let conn = db.conn().unwrap();
        conn.execute(
            "INSERT INTO expenses (user_id, amount, date) VALUES (?1, 'lots', '2024-01-01')",
            params![user],
        )
        .unwrap();
        drop(conn);

        assert!(matches!(
            db.list_observations(),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_unknown_user_status_is_invalid_data() {
        let db = Database::in_memory().unwrap();
        let user = new_user(&db, "odd@example.com");
        let conn = db.conn().unwrap();
        conn.execute(
            "UPDATE users SET status = 'suspended' WHERE id = ?1",
            params![user],
        )
        .unwrap();
        drop(conn);

        assert!(matches!(db.get_user(user), Err(Error::InvalidData(_))));
        assert!(matches!(db.list_users(), Err(Error::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_database_as_observation_source() {
        let db = Database::in_memory().unwrap();
        let user = new_user(&db, "source@example.com");
        db.add_expense(&new_expense(user, "2024-03-01", "12.5"))
            .unwrap();

        let observations = db.fetch_all_observations().await.unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].month().to_string(), "2024-03");
    }
}
