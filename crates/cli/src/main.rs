use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pages::{ProfileEditForm, ProfilePage, ProfileView, RecommendationPage, RecommendationView};
use profile_core::{
    AvailabilityStatus, InMemoryRepository, Notice, NoticeLevel, Notifier, ProfileRepository,
    RecordingNavigator, SkillCategory, TracingNotifier, UserProfile, WorkStyle,
};
use profile_editor::{EditorConfig, SkillsSection};
use search::{SearchConfig, UserSearch};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Endorse - profiles, skills and recommendations
#[derive(Parser)]
#[command(name = "endorse")]
#[command(about = "Browse and edit professional profiles and recommendations", long_about = None)]
struct Cli {
    /// Directory holding users.json and recommendations.json
    #[arg(short, long, default_value = "data/seed")]
    data_dir: PathBuf,

    /// Quiet period before a search query is applied, in milliseconds
    #[arg(long, default_value_t = search::DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search users by name, title, company or location
    Search {
        /// Text to type into the search box
        query: String,

        /// Delay between simulated keystrokes, in milliseconds
        #[arg(long, default_value = "50")]
        keystroke_ms: u64,

        /// Open the write-recommendation view for this user from the results
        #[arg(long)]
        select: Option<String>,
    },

    /// Show a user's profile and references
    Profile {
        /// User ID to display
        #[arg(long)]
        user_id: String,

        /// View as this signed-in user
        #[arg(long = "as")]
        viewer: Option<String>,
    },

    /// Show a single recommendation
    Recommendation {
        /// Recommendation ID to display
        #[arg(long)]
        id: String,
    },

    /// List the soft skill vocabulary
    Skills {
        /// Only show skills containing this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Edit your own profile and save it
    Edit {
        /// User ID to edit
        #[arg(long)]
        user_id: String,

        /// Signed-in user; defaults to the profile owner
        #[arg(long = "as")]
        viewer: Option<String>,

        /// Toggle a soft skill (repeatable)
        #[arg(long)]
        soft: Vec<String>,

        /// Submit a hard skill; an existing one is removed (repeatable)
        #[arg(long)]
        hard: Vec<String>,

        /// Add a position of interest (repeatable)
        #[arg(long)]
        position: Vec<String>,

        /// Remove a position of interest (repeatable)
        #[arg(long)]
        remove_position: Vec<String>,

        /// Turn the job search switch on or off
        #[arg(long)]
        available: Option<bool>,

        /// actively-looking, open or casually-looking
        #[arg(long)]
        status: Option<AvailabilityStatus>,

        /// Toggle a work style: remote, hybrid or inPerson (repeatable)
        #[arg(long)]
        work_style: Vec<WorkStyle>,

        /// Print the saved profile as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Prints notices to the terminal and logs them.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let marker = match notice.level {
            NoticeLevel::Success => "✓".green(),
            NoticeLevel::Warning => "!".yellow(),
            NoticeLevel::Error => "✗".red(),
        };
        println!("{} {}", marker, notice.message);
        TracingNotifier.notify(notice);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    match cli.command {
        Commands::Search {
            query,
            keystroke_ms,
            select,
        } => {
            let repository = load_repository(&cli.data_dir)?;
            let config = SearchConfig::new().with_debounce(Duration::from_millis(cli.debounce_ms));
            handle_search(repository, &config, &query, keystroke_ms, select.as_deref()).await?
        }
        Commands::Profile { user_id, viewer } => {
            let repository = load_repository(&cli.data_dir)?;
            handle_profile(repository, notifier, &user_id, viewer)?
        }
        Commands::Recommendation { id } => {
            let repository = load_repository(&cli.data_dir)?;
            handle_recommendation(repository, notifier, &id)?
        }
        Commands::Skills { search } => handle_skills(search.as_deref())?,
        Commands::Edit {
            user_id,
            viewer,
            soft,
            hard,
            position,
            remove_position,
            available,
            status,
            work_style,
            json,
        } => {
            let edits = Edits {
                soft,
                hard,
                position,
                remove_position,
                available,
                status,
                work_style,
            };
            let repository = load_repository(&cli.data_dir)?;
            let viewer = viewer.unwrap_or_else(|| user_id.clone());
            handle_edit(repository, notifier, &user_id, viewer, edits, json)?
        }
    }

    Ok(())
}

/// Load the JSON data directory into memory
fn load_repository(data_dir: &Path) -> Result<Arc<InMemoryRepository>> {
    println!("Loading profiles from {}...", data_dir.display());
    let start = Instant::now();
    let repository = InMemoryRepository::load_from_dir(data_dir)
        .with_context(|| format!("Failed to load data from {}", data_dir.display()))?;
    let (users, recommendations) = repository.counts()?;
    println!(
        "{} Loaded {} users and {} recommendations in {:?}",
        "✓".green(),
        users,
        recommendations,
        start.elapsed()
    );
    Ok(Arc::new(repository))
}

/// Handle the 'search' command by typing the query one character at a time
async fn handle_search(
    repository: Arc<InMemoryRepository>,
    config: &SearchConfig,
    query: &str,
    keystroke_ms: u64,
    select: Option<&str>,
) -> Result<()> {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut search = UserSearch::from_repository(repository.as_ref(), config, navigator.clone())?;

    let mut typed = String::new();
    for ch in query.chars() {
        typed.push(ch);
        search.set_query(typed.as_str());
        tokio::time::sleep(Duration::from_millis(keystroke_ms)).await;
    }

    while search.debounced_query() != query {
        search
            .next_evaluation()
            .await
            .ok_or_else(|| anyhow!("Search stopped before the query settled"))?;
    }

    println!(
        "{}",
        format!("Search results for '{}':", search.debounced_query()).bold().blue()
    );
    match search.empty_message() {
        Some(message) => println!("{}", message.yellow()),
        None => {
            for (rank, user) in search.results().iter().enumerate() {
                println!("{}. {}", (rank + 1).to_string().green(), describe_user(user));
            }
        }
    }
    println!(
        "{}Filter ran {} time(s) for {} keystroke(s), debounce {:?}",
        "• ".cyan(),
        search.evaluations(),
        query.chars().count(),
        search.debounce_interval()
    );

    if let Some(user_id) = select {
        search.select(user_id)?;
        for route in navigator.routes() {
            println!("{} Navigate to {}", "→".green(), route);
        }
    }
    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(
    repository: Arc<InMemoryRepository>,
    notifier: Arc<dyn Notifier>,
    user_id: &str,
    viewer: Option<String>,
) -> Result<()> {
    let mut page = ProfilePage::new(repository, notifier, viewer, EditorConfig::default());
    let state = page.load(Some(user_id));
    if let Some(message) = state.error() {
        return Err(anyhow!("{}", message));
    }
    if let Some(view) = state.ready() {
        print_profile(view);
    }
    Ok(())
}

/// Handle the 'recommendation' command
fn handle_recommendation(
    repository: Arc<InMemoryRepository>,
    notifier: Arc<dyn Notifier>,
    id: &str,
) -> Result<()> {
    let mut page = RecommendationPage::new(repository, notifier);
    let state = page.load(Some(id));
    if let Some(message) = state.error() {
        return Err(anyhow!("{}", message));
    }
    if let Some(view) = state.ready() {
        print_recommendation(view);
    }
    Ok(())
}

/// Handle the 'skills' command
fn handle_skills(search: Option<&str>) -> Result<()> {
    let mut section = SkillsSection::new(Vec::new(), Default::default());
    section.open_dialog(SkillCategory::Soft);
    section.set_search_term(search.unwrap_or_default());

    println!("{}", "Soft skills:".bold().blue());
    for option in section.soft_skill_options() {
        println!("  - {}", option.name);
    }
    Ok(())
}

/// Edits requested on the command line, applied in a fixed order
struct Edits {
    soft: Vec<String>,
    hard: Vec<String>,
    position: Vec<String>,
    remove_position: Vec<String>,
    available: Option<bool>,
    status: Option<AvailabilityStatus>,
    work_style: Vec<WorkStyle>,
}

impl Edits {
    fn apply(self, form: &mut ProfileEditForm) {
        if !self.soft.is_empty() {
            form.open_skill_dialog(SkillCategory::Soft);
            for name in &self.soft {
                form.toggle_skill(name, SkillCategory::Soft);
            }
            form.close_skill_dialog();
        }
        for name in self.hard {
            form.open_skill_dialog(SkillCategory::Hard);
            form.set_new_hard_skill(name);
            form.submit_hard_skill();
        }
        if let Some(available) = self.available {
            form.set_available(available);
        }
        if let Some(status) = self.status {
            form.set_status(status);
        }
        for style in self.work_style {
            form.toggle_work_style(style);
        }
        for position in &self.remove_position {
            form.remove_position(position);
        }
        for position in self.position {
            form.set_new_position(position);
            form.add_position();
        }
    }
}

/// Handle the 'edit' command
fn handle_edit(
    repository: Arc<InMemoryRepository>,
    notifier: Arc<dyn Notifier>,
    user_id: &str,
    viewer: String,
    edits: Edits,
    json: bool,
) -> Result<()> {
    let mut page = ProfilePage::new(
        repository.clone(),
        notifier,
        Some(viewer),
        EditorConfig::default(),
    );
    if let Some(message) = page.load(Some(user_id)).error() {
        return Err(anyhow!("{}", message));
    }

    let form = page.start_editing()?;
    edits.apply(form);
    let updates = form.draft().update_count();
    info!(user_id, updates, "applied profile edits");

    if updates == 0 {
        page.cancel();
        return Ok(());
    }
    page.save()?;

    let saved = repository.get_user(user_id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else if let Some(view) = page.state().ready() {
        print_profile(view);
    }
    Ok(())
}

fn describe_user(user: &UserProfile) -> String {
    let details: Vec<&str> = [
        user.title.as_deref(),
        user.current_company.as_deref(),
        user.location.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if details.is_empty() {
        format!("{} ({})", user.name.bold(), user.id)
    } else {
        format!("{} ({}) - {}", user.name.bold(), user.id, details.join(", "))
    }
}

/// Helper function to format and print a profile
fn print_profile(view: &ProfileView) {
    let user = &view.user;
    println!("{}", describe_user(user));
    if view.is_owner {
        println!("{}", "(your profile)".dimmed());
    }

    for category in SkillCategory::ALL {
        let names: Vec<&str> = user
            .skills
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.name.as_str())
            .collect();
        println!("{}{} skills: {}", "• ".green(), category.label(), names.join(", "));
    }

    let availability = &user.availability;
    if availability.is_available {
        println!("{}{}", "• ".cyan(), availability.status.label());
        let styles: Vec<&str> = availability.work_styles.iter().map(|s| s.label()).collect();
        println!("{}Work styles: {}", "• ".cyan(), styles.join(", "));
        println!(
            "{}Positions: {}",
            "• ".cyan(),
            availability.positions_interested_in.join(", ")
        );
    } else {
        println!("{}Not looking for work", "• ".cyan());
    }

    println!("{}", "References:".bold().blue());
    for rec in &view.references {
        println!("  - {} ({}, rating {})", rec.author.name, rec.relationship, rec.rating);
    }
    if !view.pending_references.is_empty() {
        println!("{}", "Pending references:".bold().yellow());
        for rec in &view.pending_references {
            println!("  - {} ({})", rec.author.name, rec.relationship);
        }
    }
}

/// Helper function to format and print a recommendation
fn print_recommendation(view: &RecommendationView) {
    let rec = &view.recommendation;
    let stars: String = view
        .stars
        .iter()
        .map(|filled| if *filled { '★' } else { '☆' })
        .collect();

    println!(
        "[{}] {}",
        view.author_initials.bold(),
        rec.author.name.bold().blue()
    );
    if let Some(title) = &rec.author.title {
        println!("{}", title.dimmed());
    }
    println!("{}", view.relationship_line);
    println!("{}", stars.yellow());
    println!();
    println!("{}", rec.endorsement);

    if !view.skills().is_empty() {
        let skills: Vec<&str> = view.skills().iter().map(|s| s.name.as_str()).collect();
        println!("{}Skills: {}", "• ".green(), skills.join(", "));
    }
    for doc in view.documents() {
        println!("{}Document: {} <{}>", "• ".cyan(), doc.name, doc.url);
    }
    for item in view.portfolio_items() {
        println!("{}{}: {} <{}>", "• ".cyan(), item.kind, item.name, item.url);
    }
}
