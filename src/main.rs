use std::{io, path::Path, process::ExitCode, sync::Arc};

use postboard::{
    application::{
        clock::{Clock, SystemClock},
        error::AppError,
        navigation::Route,
        session::Session,
    },
    config::{self, Command, ListArgs, NewPostArgs},
    infra::{error::InfraError, http::HttpPostsRepo, telemetry},
    presentation::{shell::run_shell, views::render_route},
};
use tokio::io::BufReader;
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

fn main() -> ExitCode {
    // Read the local offset while the process is still single-threaded.
    let clock = SystemClock::detect();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            report_application_error(&AppError::from(InfraError::from(err)));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(clock)) {
        Ok(code) => code,
        Err(error) => {
            report_application_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run(clock: SystemClock) -> Result<ExitCode, AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let repo = Arc::new(HttpPostsRepo::new(&settings.api.base_url)?);
    let clock: Arc<dyn Clock> = Arc::new(clock);
    let command = cli_args
        .command
        .unwrap_or(Command::List(ListArgs::default()));

    let mut session = Session::start(repo.clone(), repo, clock).await;
    let title = settings.site.title.as_str();

    let succeeded = match command {
        Command::List(args) => {
            session.set_search(args.search);
            true
        }
        Command::Show(args) => {
            session.navigate(Route::Post(args.id));
            true
        }
        Command::About => {
            session.navigate(Route::About);
            true
        }
        Command::Open(args) => {
            session.navigate(Route::parse(&args.path));
            true
        }
        Command::New(args) => {
            let body = read_body(&args).await?;
            session.navigate(Route::NewPost);
            session.set_title(args.title);
            session.set_body(body);
            session.submit().await.is_committed()
        }
        Command::Delete(args) => {
            session.navigate(Route::Post(args.id));
            session.delete(args.id).await.is_committed()
        }
        Command::Shell => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let input = BufReader::new(tokio::io::stdin());
            run_shell(&mut session, title, input, &mut out).await?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    println!("{}", render_route(&mut session, title)?);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn read_body(args: &NewPostArgs) -> Result<String, AppError> {
    match (&args.body, &args.body_file) {
        (_, Some(path)) => read_file(path).await,
        (Some(body), None) => Ok(body.clone()),
        (None, None) => Ok(String::new()),
    }
}

async fn read_file(path: &Path) -> Result<String, AppError> {
    tokio::fs::read_to_string(path).await.map_err(|err| {
        AppError::validation(format!("failed to read {}: {err}", path.display()))
    })
}
