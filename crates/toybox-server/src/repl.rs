//! Interactive console for the toybox server.
//!
//! `toybox-server repl` reads `/call <operation> {json}` lines, dispatches
//! them in process and prints the outcome. After `/call <operation> ` the
//! console hints an argument object built from the operation's input schema.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use serde_json::Value;

use crate::protocol::Dispatcher;
use crate::registry::OperationDefinition;
use crate::transport::framing;
use crate::types::{Outcome, Request, RequestId};

const USAGE: &str = "/call <operation> [{\"field\": value, ...}]";

const COMMANDS: &[(&str, &str)] = &[
    ("/call", "Dispatch an operation with a JSON argument object"),
    ("/ops", "Show every operation with its argument template"),
    ("/help", "Show this list"),
    ("/exit", "Leave the console"),
];

/// One parsed console line.
#[derive(Debug, PartialEq)]
pub enum ReplCommand<'a> {
    Call(&'a str),
    Ops,
    Help,
    Exit,
    Unknown(&'a str),
}

/// Whether the console keeps reading after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Split a trimmed, non-empty console line into a command.
///
/// A bare operation name is shorthand for `/call`.
pub fn parse_command(line: &str) -> ReplCommand<'_> {
    let Some(body) = line.strip_prefix('/') else {
        return ReplCommand::Call(line);
    };
    let (word, rest) = body.split_once(' ').unwrap_or((body, ""));
    match word {
        "call" | "c" => ReplCommand::Call(rest),
        "ops" | "ls" => ReplCommand::Ops,
        "help" | "?" | "" => ReplCommand::Help,
        "exit" | "quit" | "q" => ReplCommand::Exit,
        other => ReplCommand::Unknown(other),
    }
}

/// Parse the argument part of `/call <operation> [json-arguments]`.
pub fn parse_call(args: &str, id: i64) -> Result<Request, String> {
    let args = args.trim();
    let (operation, rest) = match args.split_once(char::is_whitespace) {
        Some((op, rest)) => (op, rest.trim()),
        None => (args, ""),
    };
    if operation.is_empty() {
        return Err(format!("Usage: {USAGE}"));
    }

    let arguments = if rest.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        let value: Value =
            serde_json::from_str(rest).map_err(|e| format!("Invalid JSON arguments: {e}"))?;
        if !value.is_object() {
            return Err("Arguments must be a JSON object".to_string());
        }
        value
    };

    Ok(Request::new(RequestId::from(id), operation, arguments))
}

/// Render a rendered input schema as an argument placeholder, e.g.
/// `{"n": <number>}`. Optional fields carry a trailing `?`.
pub fn argument_template(schema: &Value) -> String {
    let Some(props) = schema["properties"].as_object() else {
        return "{}".to_string();
    };
    if props.is_empty() {
        return "{}".to_string();
    }
    let required: Vec<&str> = schema["required"]
        .as_array()
        .map(|r| r.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let fields: Vec<String> = props
        .iter()
        .map(|(name, spec)| {
            let kind = spec["type"].as_str().unwrap_or("any");
            let optional = if required.contains(&name.as_str()) { "" } else { "?" };
            format!("\"{name}\": <{kind}{optional}>")
        })
        .collect();
    format!("{{{}}}", fields.join(", "))
}

/// Completion and hint state: each operation name with its argument template.
struct ConsoleHelper {
    templates: Vec<(String, String)>,
}

impl ConsoleHelper {
    fn new(definitions: &[OperationDefinition]) -> Self {
        let templates = definitions
            .iter()
            .map(|d| (d.name.clone(), argument_template(&d.input_schema)))
            .collect();
        Self { templates }
    }

    fn template_for(&self, operation: &str) -> Option<&str> {
        self.templates
            .iter()
            .find(|(name, _)| name == operation)
            .map(|(_, t)| t.as_str())
    }
}

impl Completer for ConsoleHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        let Some(rest) = input.strip_prefix("/call ") else {
            if input.contains(' ') {
                return Ok((pos, Vec::new()));
            }
            let commands = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, _)| Pair {
                    display: cmd.to_string(),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, commands));
        };

        if rest.contains(' ') {
            return Ok((pos, Vec::new()));
        }
        let operations = self
            .templates
            .iter()
            .filter(|(name, _)| name.starts_with(rest))
            .map(|(name, template)| Pair {
                display: format!("{name} {template}"),
                replacement: format!("{name} "),
            })
            .collect();
        Ok((input.len() - rest.len(), operations))
    }
}

impl Hinter for ConsoleHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        if let Some(rest) = line.strip_prefix("/call ") {
            // Only once the operation name is complete and nothing follows it.
            let operation = rest.strip_suffix(' ')?;
            if operation.contains(' ') {
                return None;
            }
            return self.template_for(operation).map(str::to_string);
        }
        if line.len() > 1 && !line.contains(' ') {
            return COMMANDS
                .iter()
                .map(|(cmd, _)| *cmd)
                .find(|cmd| cmd.starts_with(line) && *cmd != line)
                .map(|cmd| cmd[line.len()..].to_string());
        }
        None
    }
}

impl Highlighter for ConsoleHelper {}
impl Validator for ConsoleHelper {}
impl Helper for ConsoleHelper {}

fn history_path() -> std::path::PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    std::path::PathBuf::from(home).join(".toybox_server_history")
}

/// Run the console against `dispatcher` until `/exit` or end of input.
///
/// Line editing blocks the current thread; this is only meant for the
/// interactive subcommand.
pub async fn run(dispatcher: &Dispatcher) -> anyhow::Result<()> {
    let definitions = dispatcher.registry().list();
    eprintln!(
        "toybox-server v{} console, {} operations. /help lists commands.",
        env!("CARGO_PKG_VERSION"),
        definitions.len()
    );

    let config = Config::builder()
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<ConsoleHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ConsoleHelper::new(&definitions)));

    let history = history_path();
    let _ = rl.load_history(&history);

    let mut next_id: i64 = 1;
    loop {
        let line = match rl.readline("toybox> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                eprintln!("(interrupted, /exit to quit)");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::warn!("console read failed: {err}");
                break;
            }
        };
        if execute_line(dispatcher, &definitions, line.trim(), &mut next_id).await == Flow::Quit {
            break;
        }
    }

    let _ = rl.save_history(&history);
    Ok(())
}

async fn execute_line(
    dispatcher: &Dispatcher,
    definitions: &[OperationDefinition],
    line: &str,
    next_id: &mut i64,
) -> Flow {
    if line.is_empty() {
        return Flow::Continue;
    }
    match parse_command(line) {
        ReplCommand::Exit => return Flow::Quit,
        ReplCommand::Help => print_help(),
        ReplCommand::Ops => print_operations(definitions),
        ReplCommand::Unknown(cmd) => eprintln!("unknown command /{cmd}, try /help"),
        ReplCommand::Call(args) => match parse_call(args, *next_id) {
            Ok(request) => {
                *next_id += 1;
                call(dispatcher, request).await;
            }
            Err(msg) => eprintln!("{msg}"),
        },
    }
    Flow::Continue
}

fn print_help() {
    for (cmd, desc) in COMMANDS {
        eprintln!("  {cmd:<6} {desc}");
    }
    eprintln!("usage: {USAGE}");
    eprintln!("e.g.   /call squareRoot {{\"n\": 9}}");
}

fn print_operations(definitions: &[OperationDefinition]) {
    for op in definitions {
        eprintln!(
            "  {} {}\n      {}",
            op.name,
            argument_template(&op.input_schema),
            op.description.as_deref().unwrap_or("")
        );
    }
}

async fn call(dispatcher: &Dispatcher, request: Request) {
    let response = dispatcher.dispatch(request).await;
    if let Ok(frame) = framing::encode_response(&response) {
        tracing::debug!("response frame: {frame}");
    }
    match response.outcome {
        Outcome::Result(Value::String(text)) => println!("{text}"),
        Outcome::Result(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{value}"),
        },
        Outcome::Error(message) => eprintln!("error: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::builtin_registry;
    use serde_json::json;

    #[test]
    fn test_parse_call_with_arguments() {
        let req = parse_call("squareRoot {\"n\": 9}", 7).unwrap();
        assert_eq!(req.id, RequestId::from(7));
        assert_eq!(req.operation, "squareRoot");
        assert_eq!(req.arguments.unwrap()["n"], json!(9));
    }

    #[test]
    fn test_parse_call_without_arguments() {
        let req = parse_call("  greet  ", 1).unwrap();
        assert_eq!(req.operation, "greet");
        assert!(req.arguments.unwrap().is_empty());
    }

    #[test]
    fn test_parse_call_errors() {
        assert!(parse_call("", 1).unwrap_err().starts_with("Usage"));
        assert!(parse_call("greet {oops", 1)
            .unwrap_err()
            .starts_with("Invalid JSON"));
        assert_eq!(
            parse_call("greet [1]", 1).unwrap_err(),
            "Arguments must be a JSON object"
        );
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("/call greet {}"),
            ReplCommand::Call("greet {}")
        );
        assert_eq!(parse_command("greet {}"), ReplCommand::Call("greet {}"));
        assert_eq!(parse_command("/"), ReplCommand::Help);
        assert_eq!(parse_command("/q"), ReplCommand::Exit);
        assert_eq!(parse_command("/ls"), ReplCommand::Ops);
        assert_eq!(parse_command("/nope x"), ReplCommand::Unknown("nope"));
    }

    #[test]
    fn test_argument_templates_follow_schemas() {
        let registry = builtin_registry().unwrap();
        let helper = ConsoleHelper::new(&registry.list());

        assert_eq!(helper.template_for("squareRoot"), Some("{\"n\": <number>}"));
        assert_eq!(helper.template_for("greet"), Some("{\"name\": <string>}"));
        assert_eq!(helper.template_for("listOperations"), Some("{}"));
        assert_eq!(helper.template_for("missing"), None);

        let badge = helper.template_for("renderBadge").unwrap();
        assert!(badge.contains("\"color\": <string?>"), "{badge}");
    }
}
