//! Output formatting helpers.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use serde::Serialize;

use roster_core::PaginationOutput;
use roster_users::UserOutput;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// A user as shown to operators. The password hash is left out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserOutput> for UserView {
    fn from(user: UserOutput) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Print one user as fields or JSON.
pub fn user(user: UserOutput, json: bool) -> Result<()> {
    let view = UserView::from(user);
    if json {
        return json_pretty(&view);
    }

    field("ID", &view.id);
    field("Name", &view.name);
    field("Email", &view.email);
    field("Created", &timestamp(&view.created_at));
    Ok(())
}

/// Print a page of users as rows or JSON.
pub fn user_page(page: PaginationOutput<UserOutput>, json: bool) -> Result<()> {
    let page = PaginationOutput {
        items: page.items.into_iter().map(UserView::from).collect::<Vec<_>>(),
        total: page.total,
        current_page: page.current_page,
        last_page: page.last_page,
        per_page: page.per_page,
    };
    if json {
        return json_pretty(&page);
    }

    if page.items.is_empty() {
        eprintln!("{}", "No users found.".dimmed());
    }
    for user in &page.items {
        println!(
            "{}  {}  {}  {}",
            user.id,
            user.name.bold(),
            user.email,
            timestamp(&user.created_at).dimmed()
        );
    }
    eprintln!(
        "{}",
        format!(
            "Page {} of {} ({} total, {} per page)",
            page.current_page, page.last_page, page.total, page.per_page
        )
        .dimmed()
    );
    Ok(())
}
