use advisor::{AdvisorSession, SessionProgress};
use anyhow::{anyhow, bail, Context, Result};
use card_data::{Catalog, CreditCardProduct, RewardType, UserProfile};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use conversation::{join_selections, ConversationEngine};
use rand::Rng;
use scoring::{Recommendation, ScoringConfig, ScoringEngine};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Card Advisor - Credit Card Recommendation Assistant
#[derive(Parser)]
#[command(name = "card-advisor")]
#[command(about = "Find the credit card that fits how you earn and spend", long_about = None)]
struct Cli {
    /// Path to the card catalog JSON file
    #[arg(short, long, default_value = "data/credit_cards.json")]
    catalog: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the advisor's questions interactively
    Chat,

    /// Rank cards from a full set of answers, in question order
    Recommend {
        /// One answer per question: an option label or its 1-based number
        #[arg(long = "answer", required = true)]
        answers: Vec<String>,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,

        /// Show the score breakdown for each recommendation
        #[arg(long)]
        explain: bool,

        /// Number of recommendations to return
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List catalog cards
    Cards {
        /// Only show cards with this reward type
        #[arg(long, value_enum)]
        reward_type: Option<RewardFilter>,
    },

    /// Show one card in detail
    Card {
        /// Card id, e.g. hdfc-regalia
        #[arg(long)]
        id: String,
    },

    /// Run benchmark to test scoring throughput
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RewardFilter {
    Cashback,
    Points,
    Miles,
}

impl From<RewardFilter> for RewardType {
    fn from(filter: RewardFilter) -> Self {
        match filter {
            RewardFilter::Cashback => RewardType::Cashback,
            RewardFilter::Points => RewardType::Points,
            RewardFilter::Miles => RewardType::Miles,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let catalog = Arc::new(load_catalog(&cli.catalog)?);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Chat => handle_chat(catalog)?,
        Commands::Recommend {
            answers,
            json,
            explain,
            limit,
        } => handle_recommend(&catalog, &answers, json, explain, limit)?,
        Commands::Cards { reward_type } => handle_cards(&catalog, reward_type),
        Commands::Card { id } => handle_card(&catalog, &id)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(catalog, requests, concurrent).await?,
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let start = Instant::now();
    let catalog = Catalog::load_from_file(path)
        .with_context(|| format!("Failed to load card catalog from {}", path.display()))?;
    tracing::info!("Loaded {} cards in {:?}", catalog.len(), start.elapsed());
    Ok(catalog)
}

/// Handle the 'chat' command
fn handle_chat(catalog: Arc<Catalog>) -> Result<()> {
    let mut session = AdvisorSession::new(catalog, Arc::new(ScoringEngine::new()));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(step) = session.current_step() {
        println!("\n{}", step.question.bold());
        for (i, option) in step.options.iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).cyan(), option);
        }
        if step.is_multi_select() {
            println!("{}", "(pick several, e.g. 1,3)".dimmed());
        }
        print!("{} ", ">".green());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("Input ended before the dialog was complete");
        };
        let line = line.context("Failed to read answer")?;

        let Some(answer) = resolve_answer(&step.options, step.is_multi_select(), &line) else {
            println!("{}", "Please pick one of the listed numbers.".yellow());
            continue;
        };

        if let SessionProgress::Next { answered, total } = session.answer(&answer)? {
            println!("{}", format!("[{answered}/{total}]").dimmed());
        }
    }

    println!("\n{}", "Thanks! Here is what fits you best:".bold().green());
    print_recommendations(&session.recommendations()?, false);
    Ok(())
}

/// Map user input to the answer string the dialog expects.
///
/// Numbers pick options (comma-separated on multi-select steps). Anything
/// else that is not a number is passed through, matched case-insensitively
/// against option labels first. `None` means the input should be re-asked.
fn resolve_answer(options: &[&str], multi_select: bool, input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if multi_select {
        let picks: Option<Vec<Option<&str>>> =
            input.split(',').map(|token| pick_option(options, token)).collect();
        if let Some(picks) = picks {
            let labels: Option<Vec<&str>> = picks.into_iter().collect();
            return labels.map(|labels| join_selections(&labels));
        }
    } else if let Some(picked) = pick_option(options, input) {
        return picked.map(str::to_string);
    }

    let label = options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(input))
        .copied()
        .unwrap_or(input);
    Some(label.to_string())
}

/// `None` if `token` is not a number; `Some(None)` if it is out of range.
fn pick_option<'o>(options: &[&'o str], token: &str) -> Option<Option<&'o str>> {
    let number: usize = token.trim().parse().ok()?;
    Some(number.checked_sub(1).and_then(|idx| options.get(idx).copied()))
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &Catalog,
    answers: &[String],
    json: bool,
    explain: bool,
    limit: Option<usize>,
) -> Result<()> {
    let mut dialog = ConversationEngine::new();
    if answers.len() != dialog.step_count() {
        bail!(
            "Expected {} answers (one per question), got {}",
            dialog.step_count(),
            answers.len()
        );
    }

    for raw in answers {
        let answer = match dialog.current_step() {
            Some(step) => resolve_answer(&step.options, step.is_multi_select(), raw)
                .ok_or_else(|| anyhow!("Invalid answer {:?} for question '{}'", raw, step.id))?,
            None => bail!("Dialog finished early"),
        };
        dialog.process_answer(&answer)?;
    }
    let profile = dialog.into_profile();

    let mut config = ScoringConfig::default();
    if let Some(limit) = limit {
        config = config.with_max_results(limit);
    }
    let engine = ScoringEngine::with_config(config);
    let recommendations = engine.get_recommendations(&profile, catalog);

    if json {
        let output = serde_json::to_string_pretty(&recommendations)
            .context("Failed to serialize recommendations")?;
        println!("{output}");
    } else {
        print_profile(&profile);
        print_recommendations(&recommendations, explain);
    }
    Ok(())
}

/// Handle the 'cards' command
fn handle_cards(catalog: &Catalog, reward_type: Option<RewardFilter>) {
    let cards: Vec<&CreditCardProduct> = match reward_type {
        Some(filter) => catalog.cards_by_reward_type(filter.into()),
        None => catalog.cards().iter().collect(),
    };

    println!("{}", format!("{} cards", cards.len()).bold().blue());
    for card in cards {
        println!(
            "{} {} [{}] fees ₹{}/₹{}",
            format!("{:<28}", card.id).green(),
            card.name,
            card.reward_type,
            card.joining_fee,
            card.annual_fee
        );
    }
}

/// Handle the 'card' command
fn handle_card(catalog: &Catalog, id: &str) -> Result<()> {
    let card = catalog
        .get_card(id)
        .ok_or_else(|| anyhow!("Card {} not found", id))?;

    println!("{}", card.name.bold().blue());
    println!("{}Issuer: {}", "• ".green(), card.issuer);
    if !card.description.is_empty() {
        println!("{}{}", "• ".green(), card.description);
    }
    println!(
        "{}Fees: ₹{} joining, ₹{} annual",
        "• ".green(),
        card.joining_fee,
        card.annual_fee
    );
    println!(
        "{}Rewards: {} at {}",
        "• ".green(),
        card.reward_type,
        card.reward_rate
    );
    println!(
        "{}Eligibility: ₹{} a year, credit score {}+, age {}-{}",
        "• ".cyan(),
        card.eligibility.min_income,
        card.eligibility.min_credit_score,
        card.eligibility.age_range.0,
        card.eligibility.age_range.1
    );
    let multipliers = card
        .categories
        .iter()
        .map(|(category, rate)| format!("{category} {rate}x"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{}Multipliers: {}", "• ".cyan(), multipliers);
    if let Some(bonus) = card.welcome_bonus {
        println!("{}Welcome bonus: {} {}", "• ".cyan(), bonus, card.reward_type.unit_label());
    }
    println!("Benefits:");
    for benefit in &card.benefits {
        println!("  - {benefit}");
    }
    if let Some(url) = &card.apply_url {
        println!("Apply: {url}");
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<Catalog>, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let engine = Arc::new(ScoringEngine::new());
    let profiles: Vec<UserProfile> = (0..requests).map(|_| random_profile()).collect::<Result<_>>()?;

    let limiter = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    // Use tokio::spawn to make concurrent requests
    let mut handles = Vec::with_capacity(requests);
    for profile in profiles {
        let catalog = Arc::clone(&catalog);
        let engine = Arc::clone(&engine);
        let limiter = Arc::clone(&limiter);
        handles.push(tokio::spawn(async move {
            let _permit = limiter.acquire_owned().await?;
            let timing = tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                let count = engine.get_recommendations(&profile, &catalog).len();
                (start.elapsed(), count)
            })
            .await?;
            Ok::<_, anyhow::Error>(timing)
        }));
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = Vec::with_capacity(requests);
    let mut returned = 0;
    for handle in handles {
        let (elapsed, count) = handle.await??;
        timings.push(elapsed);
        returned += count;
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let avg_latency = average(&timings);
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {requests} ({concurrent} concurrent)");
    println!("Recommendations returned: {returned}");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Walk the dialog choosing random options.
fn random_profile() -> Result<UserProfile> {
    let mut rng = rand::rng();
    let mut dialog = ConversationEngine::new();
    while let Some(step) = dialog.current_step() {
        let first = rng.random_range(0..step.options.len());
        let answer = if step.is_multi_select() {
            let last = rng.random_range(first..step.options.len());
            join_selections(&step.options[first..=last])
        } else {
            step.options[first].to_string()
        };
        dialog.process_answer(&answer)?;
    }
    Ok(dialog.into_profile())
}

/// Mean of the timings, zero when there are none.
fn average(timings: &[Duration]) -> Duration {
    if timings.is_empty() {
        return Duration::ZERO;
    }
    let total: f64 = timings.iter().map(Duration::as_secs_f64).sum();
    Duration::from_secs_f64(total / timings.len() as f64)
}

/// Nearest-rank percentile of sorted timings.
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let idx = ((sorted.len() as f64 * p) as usize).min(sorted.len().saturating_sub(1));
    sorted.get(idx).copied().unwrap_or_default()
}

fn print_profile(profile: &UserProfile) {
    print!("{}", "Your profile:\n".bold().blue());
    match profile.annual_income() {
        Some(income) => println!("{}Annual income: ₹{}", "• ".green(), income),
        None => println!("{}Annual income: not disclosed", "• ".green()),
    }
    match profile.disclosed_credit_score() {
        Some(score) => println!("{}Credit score: ~{}", "• ".green(), score),
        None => println!("{}Credit score: not disclosed", "• ".green()),
    }
    println!(
        "{}Monthly spend: ₹{}",
        "• ".cyan(),
        profile.total_monthly_spend()
    );
    if let Some(benefits) = &profile.preferred_benefits {
        println!("{}Wants: {}", "• ".cyan(), benefits.join(", "));
    }
    println!();
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation<'_>], explain: bool) {
    print!("{}", "Card Recommendations:\n".bold().blue());
    if recommendations.is_empty() {
        println!("No cards match this profile.");
        return;
    }

    for (idx, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) - {}% match, ~₹{}/year",
            (idx + 1).to_string().green(),
            rec.card.name.bold(),
            rec.card.issuer,
            rec.match_percent,
            rec.estimated_rewards
        );
        for reason in &rec.reasons {
            println!("   {} {}", "✓".green(), reason);
        }
        if explain {
            println!(
                "   Score {:.1}: eligibility {:.1}, spending fit {:.1}, preference fit {:.1}",
                rec.score,
                rec.breakdown.eligibility,
                rec.breakdown.spending_fit,
                rec.breakdown.preference_fit
            );
        }
    }
}
