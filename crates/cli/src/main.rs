use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use registry::{
    load_homeless, load_missing, CaseStatus, EyeColor, Gender, HairColor, HomelessPerson, Lang,
    MissingPerson, SkinColor,
};
use search::{FilterKey, SearchSession, HOMELESS_SEARCH_FIELDS, MISSING_SEARCH_FIELDS};
use std::path::{Path, PathBuf};

/// Traceo - Missing-persons/homeless registry search
#[derive(Parser)]
#[command(name = "traceo")]
#[command(about = "Search the registry fixtures from the command line", long_about = None)]
struct Cli {
    /// Path to the JSON fixture file
    #[arg(short, long, default_value = "fixtures/missing.json")]
    data: PathBuf,

    /// Treat the fixture as homeless registrations instead of missing persons
    #[arg(long)]
    homeless: bool,

    /// Display language for attribute labels (pt or en)
    #[arg(long, default_value = "pt")]
    lang: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the records with a free-text query, facets and an age range
    Search {
        /// Case-insensitive substring over the searchable text fields
        #[arg(long)]
        query: Option<String>,

        /// Gender facet (male, female)
        #[arg(long)]
        gender: Option<String>,

        /// Eye color facet
        #[arg(long)]
        eyes: Option<String>,

        /// Hair color facet
        #[arg(long)]
        hair: Option<String>,

        /// Skin color facet
        #[arg(long)]
        skin: Option<String>,

        /// Case status facet (disappeared, found); missing persons only
        #[arg(long)]
        status: Option<String>,

        /// Inclusive lower age bound
        #[arg(long)]
        age_min: Option<String>,

        /// Inclusive upper age bound
        #[arg(long)]
        age_max: Option<String>,
    },

    /// Show one record in full
    Show {
        /// Record id to display
        #[arg(long)]
        id: String,
    },

    /// List the closed facet value sets with their display labels
    Facets,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let lang = parse_lang(&cli.lang)?;

    match cli.command {
        Commands::Search {
            query,
            gender,
            eyes,
            hair,
            skin,
            status,
            age_min,
            age_max,
        } => {
            let args = SearchArgs {
                query,
                gender,
                eyes,
                hair,
                skin,
                status,
                age_min,
                age_max,
            };
            if cli.homeless {
                handle_search_homeless(&cli.data, args, lang)
            } else {
                handle_search_missing(&cli.data, args, lang)
            }
        }
        Commands::Show { id } => {
            if cli.homeless {
                handle_show_homeless(&cli.data, &id, lang)
            } else {
                handle_show_missing(&cli.data, &id, lang)
            }
        }
        Commands::Facets => handle_facets(lang),
    }
}

fn parse_lang(raw: &str) -> Result<Lang> {
    match raw {
        "pt" => Ok(Lang::Pt),
        "en" => Ok(Lang::En),
        _ => bail!("Unsupported language {raw:?}, expected pt or en"),
    }
}

struct SearchArgs {
    query: Option<String>,
    gender: Option<String>,
    eyes: Option<String>,
    hair: Option<String>,
    skin: Option<String>,
    status: Option<String>,
    age_min: Option<String>,
    age_max: Option<String>,
}

impl SearchArgs {
    /// Validate the facet flags against the closed enumerations and apply
    /// everything to the session.
    ///
    /// The criteria store itself accepts any string; the CLI is the caller
    /// responsible for supplying enumeration-valid values.
    fn apply(self, session: &mut SearchSession) -> Result<()> {
        if let Some(query) = self.query {
            session.set(FilterKey::Query, query);
        }
        if let Some(raw) = self.gender {
            let gender: Gender = raw.parse()?;
            session.set(FilterKey::Gender, gender.as_str());
        }
        if let Some(raw) = self.eyes {
            let eyes: EyeColor = raw.parse()?;
            session.set(FilterKey::Eyes, eyes.as_str());
        }
        if let Some(raw) = self.hair {
            let hair: HairColor = raw.parse()?;
            session.set(FilterKey::Hair, hair.as_str());
        }
        if let Some(raw) = self.skin {
            let skin: SkinColor = raw.parse()?;
            session.set(FilterKey::Skin, skin.as_str());
        }
        if let Some(raw) = self.status {
            let status: CaseStatus = raw.parse()?;
            session.set(FilterKey::Status, status.as_str());
        }
        if let Some(age_min) = self.age_min {
            session.set(FilterKey::AgeMin, age_min);
        }
        if let Some(age_max) = self.age_max {
            session.set(FilterKey::AgeMax, age_max);
        }
        Ok(())
    }
}

fn handle_search_missing(data: &Path, args: SearchArgs, lang: Lang) -> Result<()> {
    let records = load_missing(data)
        .with_context(|| format!("Failed to load missing-person fixture {}", data.display()))?;

    let mut session = SearchSession::new(&MISSING_SEARCH_FIELDS);
    args.apply(&mut session)?;

    let visible = session.filtered(&records);
    print_result_header(visible.len(), records.len(), session.active_count());

    for person in visible {
        print_missing_card(person, lang);
    }
    Ok(())
}

fn handle_search_homeless(data: &Path, args: SearchArgs, lang: Lang) -> Result<()> {
    if args.status.is_some() {
        bail!("Homeless registrations carry no case status; drop --status");
    }

    let records = load_homeless(data)
        .with_context(|| format!("Failed to load homeless fixture {}", data.display()))?;

    let mut session = SearchSession::new(&HOMELESS_SEARCH_FIELDS);
    args.apply(&mut session)?;

    let visible = session.filtered(&records);
    print_result_header(visible.len(), records.len(), session.active_count());

    for person in visible {
        print_homeless_card(person, lang);
    }
    Ok(())
}

fn print_result_header(visible: usize, total: usize, active_filters: usize) {
    if visible == 0 {
        println!(
            "{} No results for the current filters ({} active). Try clearing some.",
            "∅".yellow(),
            active_filters
        );
    } else {
        println!(
            "{} {} of {} records match ({} active filters)",
            "✓".green(),
            visible,
            total,
            active_filters
        );
    }
}

fn format_age(age: Option<u32>) -> String {
    match age {
        Some(age) => age.to_string(),
        None => "?".to_string(),
    }
}

fn print_missing_card(person: &MissingPerson, lang: Lang) {
    println!(
        "{} {} [{}]",
        "•".cyan(),
        person.name.bold(),
        person.status.label(lang)
    );
    println!(
        "    id: {} | age: {} | eyes: {} | hair: {} | skin: {}",
        person.id,
        format_age(person.age()),
        person.eyes.label(lang),
        person.hair.label(lang),
        person.skin.label(lang)
    );
}

fn print_homeless_card(person: &HomelessPerson, lang: Lang) {
    let nickname = if person.nickname.is_empty() {
        String::new()
    } else {
        format!(" ({})", person.nickname)
    };
    println!("{} {}{}", "•".cyan(), person.name.bold(), nickname);
    println!(
        "    id: {} | age: {} | eyes: {} | hair: {} | skin: {}",
        person.id,
        format_age(person.age()),
        person.eyes.label(lang),
        person.hair.label(lang),
        person.skin.label(lang)
    );
}

fn handle_show_missing(data: &Path, id: &str, lang: Lang) -> Result<()> {
    let records = load_missing(data)
        .with_context(|| format!("Failed to load missing-person fixture {}", data.display()))?;

    let person = records
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| anyhow!("No missing person with id {id}"))?;

    println!("{}", person.name.bold().blue());
    if !person.nickname.is_empty() {
        println!("  nickname: {}", person.nickname);
    }
    println!("  status: {}", person.status.label(lang));
    println!("  gender: {}", person.gender.label(lang));
    println!("  age: {}", format_age(person.age()));
    println!(
        "  eyes: {} | hair: {} | skin: {}",
        person.eyes.label(lang),
        person.hair.label(lang),
        person.skin.label(lang)
    );
    if !person.height.is_empty() {
        println!("  height: {}", person.height);
    }
    if !person.clothes.is_empty() {
        println!("  last seen wearing: {}", person.clothes);
    }
    if person.was_child() {
        println!("  {}", "was a child at the date of disappearance".yellow());
    }
    if person.has_tattoo() {
        println!("  tattoo: {}", person.tattoo_description);
    }
    if person.has_scar() {
        println!("  scar: {}", person.scar_description);
    }
    if !person.event_report.is_empty() {
        println!("  report: {}", person.event_report);
    }
    Ok(())
}

fn handle_show_homeless(data: &Path, id: &str, lang: Lang) -> Result<()> {
    let records = load_homeless(data)
        .with_context(|| format!("Failed to load homeless fixture {}", data.display()))?;

    let person = records
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| anyhow!("No homeless registration with id {id}"))?;

    println!("{}", person.name.bold().blue());
    if !person.nickname.is_empty() {
        println!("  nickname: {}", person.nickname);
    }
    println!("  gender: {}", person.gender.label(lang));
    println!("  age: {}", format_age(person.age()));
    println!(
        "  eyes: {} | hair: {} | skin: {}",
        person.eyes.label(lang),
        person.hair.label(lang),
        person.skin.label(lang)
    );
    Ok(())
}

fn handle_facets(lang: Lang) -> Result<()> {
    println!("{}", "gender".bold());
    for value in Gender::ALL {
        println!("  {} - {}", value.as_str(), value.label(lang));
    }
    println!("{}", "eyes".bold());
    for value in EyeColor::ALL {
        println!("  {} - {}", value.as_str(), value.label(lang));
    }
    println!("{}", "hair".bold());
    for value in HairColor::ALL {
        println!("  {} - {}", value.as_str(), value.label(lang));
    }
    println!("{}", "skin".bold());
    for value in SkinColor::ALL {
        println!("  {} - {}", value.as_str(), value.label(lang));
    }
    println!("{}", "status".bold());
    for value in CaseStatus::ALL {
        println!("  {} - {}", value.as_str(), value.label(lang));
    }
    Ok(())
}
