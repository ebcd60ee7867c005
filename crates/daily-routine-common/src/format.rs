use crate::types::Activity;

const RULE_WIDTH: usize = 92;

fn row(columns: [&str; 7]) -> String {
    format!(
        "{:<10} {:<20} {:<30} {:<15} {:<10} {:<10} {:<10}\n",
        columns[0], columns[1], columns[2], columns[3], columns[4], columns[5], columns[6]
    )
}

/// Render activities as the fixed-width table shown by the view command.
///
/// Columns are padded but never truncated, so long values push the rest of
/// the row to the right.
pub fn render_table(activities: &[Activity]) -> String {
    let mut out = row(["ID", "Name", "Description", "Date", "Start Time", "End Time", "Role"]);
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for activity in activities {
        let date = activity.date.format("%Y-%m-%d").to_string();
        let start = activity.start_time.format("%H:%M:%S").to_string();
        let end = activity.end_time.format("%H:%M:%S").to_string();
        out.push_str(&row([
            &activity.id,
            &activity.name,
            &activity.description,
            &date,
            &start,
            &end,
            activity.role.as_str(),
        ]));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityFields, Role};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_empty_table_has_header_and_rule() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID         Name                 Description"));
        assert_eq!(lines[1], "-".repeat(92));
    }

    #[test]
    fn test_row_columns_are_fixed_width() {
        let activity = Activity::new(
            "A1",
            ActivityFields {
                name: "Gym".to_string(),
                description: "Weights".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                role: Role::Health,
            },
        );

        let table = render_table(&[activity]);
        let line = table.lines().nth(2).unwrap();

        assert_eq!(&line[0..11], "A1         ");
        assert_eq!(&line[11..32], "Gym                  ");
        assert_eq!(&line[32..63], "Weights                        ");
        assert_eq!(&line[63..79], "2024-05-01      ");
        assert_eq!(&line[79..90], "07:00:00   ");
        assert_eq!(&line[90..101], "08:00:00   ");
        assert_eq!(line[101..].trim_end(), "HEALTH");
    }
}
