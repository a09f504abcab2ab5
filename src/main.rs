// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipy command-line client
//!
//! Browse recipes, read comments and likes, and manage the login session
//! against the Recipy API gateway.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use recipy_client::{
    config::Config,
    models::{AuthOutcome, Credentials, NewRecipe, NewUser, Recipe},
    services::build_image_url,
    time_utils::format_utc_rfc3339,
    RecipyClient,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "recipy")]
#[command(author, version, about = "Recipy recipe-sharing client", long_about = None)]
struct Cli {
    /// Emit log lines as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List recipes
    Recipes {
        /// Only recipes owned by the logged-in user
        #[arg(long)]
        mine: bool,
    },

    /// Show one recipe with its comments and likes
    Recipe { id: String },

    /// List comments on a recipe
    Comments { recipe_id: String },

    /// Comment on a recipe
    Comment {
        recipe_id: String,
        content: String,
        /// Reply to this comment
        #[arg(long)]
        parent: Option<String>,
    },

    /// Show the like count of a recipe
    Likes { recipe_id: String },

    /// Like a recipe
    Like { recipe_id: String },

    /// Publish a new recipe
    CreateRecipe {
        #[arg(long)]
        title: String,
        #[arg(long)]
        prep_time: String,
        #[arg(long, default_value = "1")]
        portions: u32,
        /// Repeat for each step, in order
        #[arg(long = "step")]
        steps: Vec<String>,
        /// Repeat for each image reference
        #[arg(long = "image")]
        images: Vec<String>,
        #[arg(long)]
        video: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long, env = "RECIPY_PASSWORD")]
        password: String,
    },

    /// Log in and store the session token
    Login {
        username: String,
        #[arg(long, env = "RECIPY_PASSWORD")]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show session status
    Status,

    /// Resolve an image reference to a URL
    ImageUrl { reference: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json);

    let config = Config::from_env().context("Failed to load configuration")?;
    let client = RecipyClient::from_config(config)?;

    run(&client, cli.command).await
}

async fn run(client: &RecipyClient, command: Commands) -> Result<()> {
    match command {
        Commands::Recipes { mine } => {
            let recipes = if mine {
                let token = require_token(client)?;
                client.recipes.fetch_user_recipes(&token).await?
            } else {
                client.recipes.fetch_all_recipes().await?
            };
            if recipes.is_empty() {
                println!("No recipes.");
            }
            for recipe in &recipes {
                println!("{}", summary_line(recipe));
            }
        }

        Commands::Recipe { id } => {
            let (recipe, comments, likes) = tokio::join!(
                client.recipes.fetch_recipe(&id),
                client.recipes.fetch_comments(&id),
                client.recipes.get_likes_count(&id),
            );

            let Some(recipe) = recipe? else {
                bail!("Recipe {} not found", id);
            };
            print_recipe(client, &recipe);

            match likes {
                Ok(count) => println!("Likes: {}", count),
                Err(e) => tracing::warn!(error = %e, "Could not load likes"),
            }
            match comments {
                Ok(comments) => {
                    println!("Comments ({}):", comments.len());
                    for comment in comments {
                        let indent = if comment.is_reply() { "    " } else { "  " };
                        println!(
                            "{}[{}] {}: {}",
                            indent,
                            comment.id,
                            comment.user_name.as_deref().unwrap_or("User"),
                            comment.content
                        );
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Could not load comments"),
            }
        }

        Commands::Comments { recipe_id } => {
            let comments = client.recipes.fetch_comments(&recipe_id).await?;
            if comments.is_empty() {
                println!("No comments yet.");
            }
            for comment in comments {
                println!(
                    "[{}] {} ({}): {}",
                    comment.id,
                    comment.user_name.as_deref().unwrap_or("User"),
                    comment.created_at,
                    comment.content
                );
            }
        }

        Commands::Comment {
            recipe_id,
            content,
            parent,
        } => {
            let token = client.session.get_token();
            let comment = client
                .recipes
                .create_comment(&recipe_id, &content, parent.as_deref(), token.as_deref())
                .await?;
            println!("Comment {} posted.", comment.id);
        }

        Commands::Likes { recipe_id } => {
            let count = client.recipes.get_likes_count(&recipe_id).await?;
            println!("{}", count);
        }

        Commands::Like { recipe_id } => {
            let token = client.session.get_token();
            let like = client
                .recipes
                .like_recipe(&recipe_id, token.as_deref())
                .await?;
            match like.likes_count {
                Some(count) => println!("Liked. {} likes.", count),
                None => println!("Liked."),
            }
        }

        Commands::CreateRecipe {
            title,
            prep_time,
            portions,
            steps,
            images,
            video,
        } => {
            let token = require_token(client)?;
            let recipe = NewRecipe {
                title,
                prep_time,
                portions,
                steps,
                images,
                video,
            };
            let created = client.recipes.create_recipe(&recipe, &token).await?;
            println!("Created recipe {}.", created.id);
        }

        Commands::Register {
            name,
            email,
            username,
            password,
        } => {
            let user = NewUser {
                name,
                email,
                username,
                password,
            };
            report(client.users.register_user(&user).await?, "Registered.")?;
        }

        Commands::Login { username, password } => {
            let credentials = Credentials { username, password };
            report(client.users.login_user(&credentials).await?, "Logged in.")?;
        }

        Commands::Logout => {
            client.users.logout_user();
            println!("Logged out.");
        }

        Commands::Status => match client.session.expires_at() {
            Some(expires_at) => println!(
                "Logged in (session expires {}).",
                format_utc_rfc3339(expires_at)
            ),
            None => println!("Not logged in."),
        },

        Commands::ImageUrl { reference } => {
            println!(
                "{}",
                build_image_url(&client.config.api_gateway_url, &reference)
            );
        }
    }

    Ok(())
}

fn require_token(client: &RecipyClient) -> Result<String> {
    client
        .session
        .get_token()
        .context("Not logged in. Run `recipy login <username>` first.")
}

fn report(outcome: AuthOutcome, success: &str) -> Result<()> {
    match outcome {
        AuthOutcome::Success => {
            println!("{}", success);
            Ok(())
        }
        AuthOutcome::Rejected { message } => bail!(message),
    }
}

fn summary_line(recipe: &Recipe) -> String {
    format!(
        "{}\t{}\t{}\t{} portions",
        recipe.id, recipe.title, recipe.prep_time, recipe.portions
    )
}

fn print_recipe(client: &RecipyClient, recipe: &Recipe) {
    println!("{} ({})", recipe.title, recipe.id);
    println!("Prep time: {}  Portions: {}", recipe.prep_time, recipe.portions);
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    for url in client.recipes.image_urls(recipe) {
        println!("Image: {}", url);
    }
    if let Some(video) = &recipe.video {
        println!("Video: {}", video);
    }
}

/// Initialize logging on stderr, plain or JSON.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("recipy_client=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
