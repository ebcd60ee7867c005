use anyhow::{Context, Result};
use clap::Args;
use daily_routine_common::{parse_date, parse_role_choice, parse_time, render_table};
use daily_routine_common::{Activity, ActivityFields};
use daily_routine_db::ActivityStore;

/// Field values shared by `add` and `update`.
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, help = "Date in yyyy-MM-dd format")]
    pub date: String,

    #[arg(long, help = "Start time in HH:mm format")]
    pub start: String,

    #[arg(long, help = "End time in HH:mm format")]
    pub end: String,

    #[arg(long, help = "1 Work, 2 Leisure, 3 Health, 4 Education, 5 Other")]
    pub role: String,
}

impl FieldArgs {
    pub fn to_fields(&self) -> daily_routine_common::Result<ActivityFields> {
        Ok(ActivityFields {
            name: self.name.clone(),
            description: self.description.clone(),
            date: parse_date(&self.date)?,
            start_time: parse_time(&self.start)?,
            end_time: parse_time(&self.end)?,
            role: parse_role_choice(&self.role)?,
        })
    }
}

pub async fn add(store: &ActivityStore, id: &str, args: &FieldArgs) -> Result<()> {
    let activity = Activity::new(id, args.to_fields()?);
    store.create(&activity).await.context("Failed to add activity")?;

    println!("Activity added successfully.");
    Ok(())
}

pub async fn list(store: &ActivityStore, json: bool) -> Result<()> {
    let activities = store.list().await.context("Failed to retrieve activities")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&activities)?);
    } else {
        print!("{}", render_table(&activities));
    }
    Ok(())
}

pub async fn show(store: &ActivityStore) -> Result<()> {
    let activities = store.list().await.context("Failed to retrieve activities")?;

    for activity in &activities {
        println!("{}", activity.format_details());
    }
    Ok(())
}

pub async fn update(store: &ActivityStore, id: &str, args: &FieldArgs) -> Result<()> {
    let fields = args.to_fields()?;
    let outcome = store.update(id, &fields).await.context("Failed to update activity")?;

    println!("Activity updated successfully.");
    if outcome.is_noop() {
        println!("(no activity with ID {} was found)", id);
    }
    Ok(())
}

pub async fn delete(store: &ActivityStore, id: &str) -> Result<()> {
    let outcome = store.delete(id).await.context("Failed to delete activity")?;

    println!("Activity deleted successfully.");
    if outcome.is_noop() {
        println!("(no activity with ID {} was found)", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daily_routine_common::Role;
    use daily_routine_db::DatabaseConfig;
    use tempfile::tempdir;

    fn gym_args() -> FieldArgs {
        FieldArgs {
            name: "Gym".to_string(),
            description: "Leg day".to_string(),
            date: "2024-05-01".to_string(),
            start: "07:00".to_string(),
            end: "08:00".to_string(),
            role: "3".to_string(),
        }
    }

    #[test]
    fn test_to_fields() {
        let fields = gym_args().to_fields().unwrap();
        assert_eq!(fields.role, Role::Health);
        assert_eq!(Activity::new("A1", fields).duration_minutes(), 60);
    }

    #[test]
    fn test_to_fields_rejects_bad_input() {
        let mut args = gym_args();
        args.role = "6".to_string();
        assert!(args.to_fields().is_err());

        let mut args = gym_args();
        args.date = "2024/05/01".to_string();
        assert!(args.to_fields().is_err());
    }

    #[tokio::test]
    async fn test_one_shot_commands() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("activities.db").to_str().unwrap().to_string();
        let store = ActivityStore::open(DatabaseConfig { path }).await.unwrap();

        add(&store, "A1", &gym_args()).await.unwrap();
        assert!(add(&store, "A1", &gym_args()).await.is_err());

        let mut args = gym_args();
        args.name = "Swim".to_string();
        update(&store, "A1", &args).await.unwrap();
        list(&store, true).await.unwrap();
        show(&store).await.unwrap();

        assert_eq!(store.list().await.unwrap()[0].name, "Swim");

        delete(&store, "A1").await.unwrap();
        delete(&store, "A1").await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_role_never_reaches_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("activities.db").to_str().unwrap().to_string();
        let store = ActivityStore::open(DatabaseConfig { path }).await.unwrap();

        let mut args = gym_args();
        args.role = "0".to_string();
        assert!(add(&store, "A1", &args).await.is_err());
        assert!(store.list().await.unwrap().is_empty());
    }
}
