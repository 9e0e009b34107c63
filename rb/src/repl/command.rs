//! Slash command parsing

use thiserror::Error;

use crate::domain::{Day, MealSlot, ParseWeekError};
use crate::views::{InputError, InputField, validate_query};

/// A parsed REPL slash command
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Quit,
    Trending,
    Search(String),
    Ingredients {
        list: String,
        diet: Option<String>,
        cuisine: Option<String>,
    },
    Products(String),
    Recipe(u64),
    Cook(u64),
    Plan {
        day: Day,
        slot: MealSlot,
        id: Option<u64>,
    },
    Unplan {
        day: Day,
        slot: MealSlot,
    },
    Planner,
    Grocery,
    GroceryAdd(Vec<u64>),
    Check {
        id: u64,
        name: String,
    },
    GroceryClear,
    GroceryFromPlan,
}

/// Why a slash command was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid recipe id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Week(#[from] ParseWeekError),
}

fn parse_id(raw: &str) -> Result<u64, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// Parse a day label, accepting "today"
fn parse_day(raw: &str) -> Result<Day, ParseWeekError> {
    if raw.eq_ignore_ascii_case("today") {
        Ok(Day::today())
    } else {
        raw.parse()
    }
}

/// Split `--diet x --cuisine y` flags out of an ingredient list
fn split_filters(rest: &str) -> (String, Option<String>, Option<String>) {
    let mut list = Vec::new();
    let mut diet = Vec::new();
    let mut cuisine = Vec::new();
    let mut target = &mut list;

    for word in rest.split_whitespace() {
        match word {
            "--diet" => target = &mut diet,
            "--cuisine" => target = &mut cuisine,
            _ => target.push(word),
        }
    }

    let join = |words: Vec<&str>| Some(words.join(" ")).filter(|s| !s.is_empty());
    (list.join(" "), join(diet), join(cuisine))
}

/// Parse one line of input beginning with '/'
pub fn parse_command(input: &str) -> Result<ReplCommand, CommandError> {
    let input = input.trim();
    let (cmd, rest) = match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    match cmd {
        "/help" | "/h" => Ok(ReplCommand::Help),
        "/quit" | "/q" | "/exit" => Ok(ReplCommand::Quit),
        "/trending" => Ok(ReplCommand::Trending),
        "/search" => Ok(ReplCommand::Search(validate_query(rest, InputField::SearchTerm)?)),
        "/ingredients" => {
            let (list, diet, cuisine) = split_filters(rest);
            Ok(ReplCommand::Ingredients {
                list: validate_query(&list, InputField::Ingredients)?,
                diet,
                cuisine,
            })
        }
        "/products" => Ok(ReplCommand::Products(validate_query(rest, InputField::ProductName)?)),
        "/recipe" => match args.as_slice() {
            [id] => Ok(ReplCommand::Recipe(parse_id(id)?)),
            _ => Err(CommandError::Usage("/recipe <id>")),
        },
        "/cook" => match args.as_slice() {
            [id] => Ok(ReplCommand::Cook(parse_id(id)?)),
            _ => Err(CommandError::Usage("/cook <id>")),
        },
        "/plan" => match args.as_slice() {
            [day, slot] => Ok(ReplCommand::Plan {
                day: parse_day(day)?,
                slot: slot.parse()?,
                id: None,
            }),
            [day, slot, id] => Ok(ReplCommand::Plan {
                day: parse_day(day)?,
                slot: slot.parse()?,
                id: Some(parse_id(id)?),
            }),
            _ => Err(CommandError::Usage("/plan <day> <breakfast|lunch|dinner> [recipe-id]")),
        },
        "/unplan" => match args.as_slice() {
            [day, slot] => Ok(ReplCommand::Unplan {
                day: parse_day(day)?,
                slot: slot.parse()?,
            }),
            _ => Err(CommandError::Usage("/unplan <day> <breakfast|lunch|dinner>")),
        },
        "/planner" => Ok(ReplCommand::Planner),
        "/grocery" => Ok(ReplCommand::Grocery),
        "/grocery-add" => {
            let ids = args.iter().map(|a| parse_id(a)).collect::<Result<Vec<_>, _>>()?;
            Ok(ReplCommand::GroceryAdd(ids))
        }
        "/check" => match args.split_first() {
            Some((id, name)) if !name.is_empty() => Ok(ReplCommand::Check {
                id: parse_id(id)?,
                name: name.join(" "),
            }),
            _ => Err(CommandError::Usage("/check <ingredient-id> <name>")),
        },
        "/grocery-clear" => Ok(ReplCommand::GroceryClear),
        "/grocery-from-plan" => Ok(ReplCommand::GroceryFromPlan),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("/help").unwrap(), ReplCommand::Help);
        assert_eq!(parse_command("/q").unwrap(), ReplCommand::Quit);
        assert_eq!(parse_command("/planner").unwrap(), ReplCommand::Planner);
        assert_eq!(parse_command("/grocery-from-plan").unwrap(), ReplCommand::GroceryFromPlan);
    }

    #[test]
    fn test_parse_search_keeps_spaces() {
        assert_eq!(
            parse_command("/search  chicken curry ").unwrap(),
            ReplCommand::Search("chicken curry".to_string())
        );
    }

    #[test]
    fn test_empty_search_is_rejected_with_prompt() {
        let err = parse_command("/search   ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a search term.");

        let err = parse_command("/ingredients --diet vegan").unwrap_err();
        assert_eq!(err.to_string(), "Please enter at least one ingredient.");

        let err = parse_command("/products").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a product name.");
    }

    #[test]
    fn test_parse_ingredients_with_filters() {
        let cmd = parse_command("/ingredients chicken, rice --diet gluten free --cuisine thai").unwrap();
        assert_eq!(
            cmd,
            ReplCommand::Ingredients {
                list: "chicken, rice".to_string(),
                diet: Some("gluten free".to_string()),
                cuisine: Some("thai".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_plan() {
        assert_eq!(
            parse_command("/plan mon dinner 42").unwrap(),
            ReplCommand::Plan {
                day: Day::Monday,
                slot: MealSlot::Dinner,
                id: Some(42),
            }
        );
        assert_eq!(
            parse_command("/plan Friday Lunch").unwrap(),
            ReplCommand::Plan {
                day: Day::Friday,
                slot: MealSlot::Lunch,
                id: None,
            }
        );
        assert!(matches!(
            parse_command("/plan today lunch"),
            Ok(ReplCommand::Plan { slot: MealSlot::Lunch, .. })
        ));
        assert!(matches!(parse_command("/plan someday dinner"), Err(CommandError::Week(_))));
        assert!(matches!(parse_command("/plan monday brunch"), Err(CommandError::Week(_))));
        assert!(matches!(parse_command("/plan monday"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_parse_check_multiword_name() {
        assert_eq!(
            parse_command("/check 19334 brown sugar").unwrap(),
            ReplCommand::Check {
                id: 19334,
                name: "brown sugar".to_string(),
            }
        );
        assert!(matches!(parse_command("/check 19334"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_parse_grocery_add_ids() {
        assert_eq!(parse_command("/grocery-add").unwrap(), ReplCommand::GroceryAdd(vec![]));
        assert_eq!(parse_command("/grocery-add 1 2").unwrap(), ReplCommand::GroceryAdd(vec![1, 2]));
        assert!(matches!(parse_command("/grocery-add x"), Err(CommandError::InvalidId(_))));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse_command("/fly").unwrap_err(), CommandError::Unknown("/fly".to_string()));
    }
}
