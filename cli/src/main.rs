//! MatEdu command line client.
//!
//! Thin front end over `matedu-sdk`: every subcommand maps to one client
//! operation and prints the server payload as pretty JSON.

mod args;

use anyhow::Context;
use clap::Parser;
use matedu_sdk::{ClientConfig, MatEduClient, NewUser, UserType};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,matedu_sdk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(token_file) = cli.token_file {
        config.token_path = Some(token_file);
    }

    let client = MatEduClient::new(config).context("failed to create API client")?;
    run(&client, cli.command).await
}

async fn run(client: &MatEduClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => {
            let response = client
                .login(&args.email, &args.password)
                .await
                .context("login failed")?;
            if response.access_token.is_none() {
                tracing::warn!("login response carried no access token");
            }
            print(&json!({ "state": client.state().await.to_string() }))
        }
        Commands::Logout => {
            client.logout().await?;
            print(&json!({ "state": client.state().await.to_string() }))
        }
        Commands::Register(args) => {
            let user = NewUser::student(args.first_name, args.last_name, args.email, args.password)
                .with_user_type(UserType::from(args.role));
            print(&client.register(&user).await.context("registration failed")?)
        }
        Commands::Me => print(&client.me().await?),
        Commands::Stats { user_id } => print(&client.user_stats(user_id).await?),
        Commands::Areas => print(&client.areas().await?),
        Commands::Courses(args) => print(&client.courses(&args.filters()).await?),
        Commands::Course { course_id } => print(&client.course(course_id).await?),
        Commands::Enroll { course_id } => print(&client.enroll(course_id).await?),
        Commands::MyCourses => print(&client.my_courses().await?),
        Commands::Lessons { course_id } => print(&client.course_lessons(course_id).await?),
        Commands::StartLesson { lesson_id } => print(&client.start_lesson(lesson_id).await?),
        Commands::CompleteLesson { lesson_id } => print(&client.complete_lesson(lesson_id).await?),
        Commands::Exercises { lesson_id } => print(&client.lesson_exercises(lesson_id).await?),
        Commands::Answer {
            exercise_id,
            answer,
        } => print(&client.submit_answer(exercise_id, &answer).await?),
        Commands::Progress { course_id } => print(&client.course_progress(course_id).await?),
        Commands::Status => print(&json!({
            "base_url": client.config().base_url,
            "state": client.state().await.to_string(),
        })),
    }
}

fn print<T: Serialize + ?Sized>(payload: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(payload)?;
    println!("{}", rendered);
    Ok(())
}
