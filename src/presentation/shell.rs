//! Line-oriented interactive session.
//!
//! Every command acts on one long-lived [`Session`], so the search term, the
//! draft, and the current route carry over from line to line.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::application::{error::AppError, navigation::Route, session::Session};
use crate::domain::entities::PostId;
use crate::infra::error::InfraError;
use crate::presentation::views::render_route;

const PROMPT: &str = "postboard> ";

const HELP: &str = "\
commands:
  search <term>   filter the listing (empty term shows everything)
  go <path>       open a route: /, /post, /post/<id>, /about
  title <text>    set the new post title
  body <text>     set the new post body
  submit          create a post from the title and body
  delete [id]     delete a post (defaults to the post being viewed)
  show            render the current view again
  help            this text
  quit            leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Go(Route),
    Title(String),
    Body(String),
    Submit,
    Delete(Option<PostId>),
    Show,
    Help,
    Quit,
    Nothing,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "" => ShellCommand::Nothing,
            "search" => ShellCommand::Search(rest.to_string()),
            "go" | "open" => ShellCommand::Go(Route::parse(rest)),
            "title" => ShellCommand::Title(rest.to_string()),
            "body" => ShellCommand::Body(rest.to_string()),
            "submit" => ShellCommand::Submit,
            "delete" if rest.is_empty() => ShellCommand::Delete(None),
            "delete" => {
                let id = rest.parse::<PostId>().map_err(|err| err.to_string())?;
                ShellCommand::Delete(Some(id))
            }
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command `{other}`; try `help`")),
        };
        Ok(command)
    }
}

/// Drive `session` from `input` until it ends or `quit` is read, writing
/// views to `out`.
pub async fn run_shell<R, W>(
    session: &mut Session,
    site_title: &str,
    input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write_view(session, site_title, out)?;
    prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.map_err(InfraError::from)? {
        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}").map_err(InfraError::from)?;
                prompt(out)?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Nothing => {}
            ShellCommand::Help => writeln!(out, "{HELP}").map_err(InfraError::from)?,
            ShellCommand::Show => write_view(session, site_title, out)?,
            ShellCommand::Search(term) => {
                session.set_search(term);
                session.navigate(Route::Home);
                write_view(session, site_title, out)?;
            }
            ShellCommand::Go(route) => {
                session.navigate(route);
                write_view(session, site_title, out)?;
            }
            ShellCommand::Title(title) => {
                session.set_title(title);
                session.navigate(Route::NewPost);
                write_view(session, site_title, out)?;
            }
            ShellCommand::Body(body) => {
                session.set_body(body);
                session.navigate(Route::NewPost);
                write_view(session, site_title, out)?;
            }
            ShellCommand::Submit => {
                session.submit().await;
                write_view(session, site_title, out)?;
            }
            ShellCommand::Delete(id) => {
                let target = id.or(match session.route() {
                    Route::Post(current) => Some(*current),
                    _ => None,
                });
                match target {
                    Some(id) => {
                        session.delete(id).await;
                        write_view(session, site_title, out)?;
                    }
                    None => {
                        warn!("delete needs an id outside a post page");
                        writeln!(out, "delete needs an id, e.g. `delete 3`")
                            .map_err(InfraError::from)?;
                    }
                }
            }
        }
        prompt(out)?;
    }

    out.flush().map_err(InfraError::from)?;
    Ok(())
}

fn write_view<W: Write>(
    session: &mut Session,
    site_title: &str,
    out: &mut W,
) -> Result<(), AppError> {
    let view = render_route(session, site_title)?;
    writeln!(out, "{view}").map_err(InfraError::from)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<(), AppError> {
    write!(out, "{PROMPT}").map_err(InfraError::from)?;
    out.flush().map_err(InfraError::from)?;
    Ok(())
}
