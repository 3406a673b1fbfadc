use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use log::{debug, error};

use nutrilens::{
    config::Config,
    logger,
    routes::Route,
    screens::{
        about_you::AboutYouForm,
        chat::ChatScreen,
        community,
        display::{rating_color, DisplayView},
        login::LoginForm,
        results,
        settings::{self, LogoutChoice},
        upload::PhotoUpload,
        Alert,
    },
    App,
};

#[derive(Parser)]
#[command(name = "nutrilens", version, about = "Scan food, chat with the nutrition bot")]
struct Cli {
    /// Where the session is kept between runs.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Backend base url, for every endpoint including chat.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with a phone number and password.
    Login {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Navigate to a path and print where the guard lets you land.
    Open { path: String },
    /// Ask the nutrition bot something.
    Chat {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Upload a photo of a product for analysis.
    Analyze {
        image: PathBuf,
        /// Print the raw response instead of the summary.
        #[arg(long)]
        raw: bool,
    },
    /// Save your profile and preferences.
    AboutYou {
        #[arg(long)]
        age: String,
        #[arg(long)]
        gender: String,
        /// Height in cm.
        #[arg(long)]
        height: String,
        #[arg(long)]
        purpose: Option<String>,
        #[arg(long = "allergy")]
        allergies: Vec<String>,
        #[arg(long)]
        other_allergy: Option<String>,
        #[arg(long = "disease")]
        diseases: Vec<String>,
        #[arg(long = "goal")]
        goals: Vec<String>,
        #[arg(long)]
        diet: Option<String>,
    },
    /// Print the community feed.
    Community,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = Config::load();
    if let Err(err) = logger::init(config.log_level) {
        eprintln!("Failed to initialize logging: {err}");
    }
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_owned();
        config.chat_url = config.api_url.clone();
    }
    debug!("Using {:?}", config);

    let app = match App::start(config) {
        Ok(app) => app,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, &app).await;
    app.shutdown().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(alert) => {
            eprintln!("{}: {}", alert.title, alert.message);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, app: &App) -> Result<(), Alert> {
    match command {
        Command::Login { phone, password } => {
            LoginForm::new(phone, password).submit(&app.auth).await?;
            let landed = app.open(Route::Root);
            if let Some(session) = app.auth.current() {
                println!("Logged in as {} ({})", session.name, landed);
            }
        }
        Command::Logout => {
            settings::logout(LogoutChoice::Logout, &app.auth, &app.navigator).await;
            println!("Logged out");
        }
        Command::Whoami => match app.auth.current() {
            Some(session) => println!(
                "{} <{}> (user {})",
                session.name, session.phone_number, session.id
            ),
            None => println!("Not logged in"),
        },
        Command::Open { path } => {
            println!("{}", app.open(Route::parse(&path)));
        }
        Command::Chat { message } => {
            let mut chat = ChatScreen::default();
            chat.input = message.join(" ");
            chat.send(app.client()).await;
            if let Some(reply) = chat.messages().last() {
                println!("{}", reply.text);
            }
        }
        Command::Analyze { image, raw } => {
            let mut upload = PhotoUpload::default();
            upload
                .select(&image)
                .await
                .map_err(|err| Alert::new("Upload Failed", err.to_string()))?;
            upload
                .upload(app.auth.current().as_ref(), app.client(), &app.navigator)
                .await?;

            let Some(response) = upload.response() else {
                return Ok(());
            };
            if raw {
                let body = results::body(response)
                    .map_err(|err| Alert::new("Error", err.to_string()))?;
                println!("{}\n{}", results::title(response), body);
            } else {
                print_analysis(DisplayView::new(Some(response)));
            }
        }
        Command::AboutYou {
            age,
            gender,
            height,
            purpose,
            allergies,
            other_allergy,
            diseases,
            goals,
            diet,
        } => {
            let mut form = AboutYouForm::default();
            form.age = age;
            form.gender = gender;
            form.height = height;
            form.other_allergy = other_allergy.unwrap_or_default();
            if let Some(purpose) = purpose {
                form.select_purpose(&purpose);
            }
            if let Some(diet) = diet {
                form.select_diet(&diet);
            }
            allergies.iter().for_each(|item| form.toggle_allergy(item));
            diseases.iter().for_each(|item| form.toggle_disease(item));
            goals.iter().for_each(|item| form.toggle_goal(item));

            let alert = form.submit(app.auth.current().as_ref(), app.client()).await?;
            println!("{}", alert.message);
        }
        Command::Community => {
            for post in community::feed() {
                println!("[{}] {} by {}, {}", post.category, post.title, post.author, post.time);
                for paragraph in post.content {
                    println!("  {}", paragraph);
                }
            }
        }
    }

    Ok(())
}

fn print_analysis(view: DisplayView) {
    let DisplayView::Product(product) = view else {
        println!("No analysis data available");
        return;
    };

    println!("{}\n\n{}\n", product.title, product.introduction);
    for ingredient in product.ingredients {
        println!(
            "  {} [{}] {}",
            ingredient.name,
            String::from(ingredient.health_rating.clone()),
            rating_color(&ingredient.health_rating)
        );
        if let Some(description) = &ingredient.description {
            println!("    {}", description);
        }
        if !ingredient.alternatives.is_empty() {
            println!("    try instead: {}", ingredient.alternatives.join(", "));
        }
    }
    for link in product.links() {
        println!("  -> {}", link);
    }
}
