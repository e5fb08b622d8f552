use std::str::FromStr;

pub const HELP: &str = "Available commands:
    help                                      - show this help
    exit                                      - exit program
    list <user_id>                            - list user's books
    get <user_id> <book_id>                   - get book info
    remove <user_id> <book_id>                - remove book
    update <user_id> <book_id> <page>         - update reading progress
    add <user_id> <book_id> <title> <author>  - add new book";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    List { user_id: i64 },
    Get { user_id: i64, book_id: i64 },
    Remove { user_id: i64, book_id: i64 },
    Update { user_id: i64, book_id: i64, page: i64 },
    Add { user_id: i64, book_id: i64, title: String, author: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("unknown command: {0:?}")]
    Unknown(String),

    #[error("wrong format, expected: {0}")]
    Usage(&'static str),
}

const LIST_USAGE: &str = "list <user_id>";
const GET_USAGE: &str = "get <user_id> <book_id>";
const REMOVE_USAGE: &str = "remove <user_id> <book_id>";
const UPDATE_USAGE: &str = "update <user_id> <book_id> <page>";
const ADD_USAGE: &str = "add <user_id> <book_id> <book title> <author name>";

fn ints<const N: usize>(args: &str, usage: &'static str) -> Result<[i64; N], ParseCommandError> {
    let mut out = [0; N];
    let mut parts = args.split_whitespace();
    for slot in out.iter_mut() {
        *slot = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or(ParseCommandError::Usage(usage))?;
    }
    Ok(out)
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (cmd, args) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            "list" => {
                let [user_id] = ints::<1>(args, LIST_USAGE)?;
                Ok(Command::List { user_id })
            }
            "get" => {
                let [user_id, book_id] = ints::<2>(args, GET_USAGE)?;
                Ok(Command::Get { user_id, book_id })
            }
            "remove" => {
                let [user_id, book_id] = ints::<2>(args, REMOVE_USAGE)?;
                Ok(Command::Remove { user_id, book_id })
            }
            "update" => {
                let [user_id, book_id, page] = ints::<3>(args, UPDATE_USAGE)?;
                Ok(Command::Update {
                    user_id,
                    book_id,
                    page,
                })
            }
            "add" => {
                // the author is the rest of the line and may contain spaces
                let mut parts = args.trim_start().splitn(4, ' ');
                let [user_id, book_id] = ints::<2>(
                    &format!(
                        "{} {}",
                        parts.next().unwrap_or_default(),
                        parts.next().unwrap_or_default()
                    ),
                    ADD_USAGE,
                )?;
                let title = parts.next().filter(|t| !t.is_empty());
                let author = parts.next().map(str::trim).filter(|a| !a.is_empty());
                match (title, author) {
                    (Some(title), Some(author)) => Ok(Command::Add {
                        user_id,
                        book_id,
                        title: title.to_string(),
                        author: author.to_string(),
                    }),
                    _ => Err(ParseCommandError::Usage(ADD_USAGE)),
                }
            }
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}
