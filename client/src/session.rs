use std::io::Write;

use anyhow::Context;
use chrono::{Local, NaiveDate};

use crate::{
    api::ApiClient,
    command::{Command, HELP},
    models::{Book, ClientResult},
};

/// Run one command against the API and render its output.
/// Returns `None` when the session should end.
pub async fn execute(client: &ApiClient, command: Command) -> ClientResult<Option<String>> {
    let output = match command {
        Command::Help => HELP.to_string(),
        Command::Exit => return Ok(None),
        Command::List { user_id } => {
            let books = client.list_books(user_id).await?;
            let mut out = String::from("Books:");
            for b in books {
                out.push_str(&format!("\n - '{}' (page {})", b.title, b.page));
            }
            out
        }
        Command::Get { user_id, book_id } => {
            let book = client.get_book(user_id, book_id).await?;
            format!("{}'s Book {}: {}", user_id, book_id, to_json(&book))
        }
        Command::Remove { user_id, book_id } => {
            client.remove_book(user_id, book_id).await?;
            "Book removed".to_string()
        }
        Command::Update {
            user_id,
            book_id,
            page,
        } => {
            let book = client.update_progress(user_id, book_id, page).await?;
            format!("Page updated: {}", book.page)
        }
        Command::Add {
            user_id,
            book_id,
            title,
            author,
        } => {
            let book = Book {
                id: book_id,
                title,
                author,
                published: Local::now().date_naive(),
                page: 1,
            };
            let added = client.add_book(user_id, &book).await?;
            format!("Book added: {}", to_json(&added))
        }
    };
    Ok(Some(output))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

/// Walk a book through its whole lifecycle for one user, stopping at the
/// first failure. The final lookup is expected to miss and its error body is
/// written out.
pub async fn demo(client: &ApiClient, user_id: i64, out: &mut impl Write) -> anyhow::Result<()> {
    let book = Book {
        id: 1234,
        title: "Doctor Zhivago".into(),
        author: "Boris Pasternak".into(),
        published: NaiveDate::from_ymd_opt(1957, 11, 23).context("invalid demo date")?,
        page: 2,
    };

    let added = client.add_book(user_id, &book).await.context("add failed")?;
    writeln!(out, "Book added: {}", to_json(&added))?;

    let steps = [
        Command::List { user_id },
        Command::Update {
            user_id,
            book_id: book.id,
            page: 25,
        },
        Command::Get {
            user_id,
            book_id: book.id,
        },
        Command::Remove {
            user_id,
            book_id: book.id,
        },
    ];
    for step in steps {
        let label = format!("{:?}", step);
        if let Some(text) = execute(client, step).await.with_context(|| format!("{label} failed"))? {
            writeln!(out, "{text}")?;
        }
    }

    match client.get_book(user_id, book.id).await {
        Ok(book) => anyhow::bail!("book {} still present after removal", book.id),
        Err(e) => {
            let body = e.api_error().cloned().ok_or(e).context("lookup after removal failed")?;
            writeln!(out, "{}", to_json(&body))?;
        }
    }
    Ok(())
}
