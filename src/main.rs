use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

mod auth;
mod filter;
mod loader;
mod models;
mod recommend;
mod report;
mod sentiment;

use models::{FeedbackRecord, FilterCriteria, SentimentLabels};
use recommend::TemplateRecommender;

#[derive(Parser)]
#[command(name = "feedback-insights")]
#[command(about = "Patient feedback sentiment insights for clinic networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List clinics present in the feedback data
    Clinics {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// List physicians, restricted to one clinic when given
    Physicians {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        clinic: Option<String>,
    },
    /// Print sentiment counts for the current selection
    Summary {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        clinic: Option<String>,
        #[arg(long)]
        physician: Option<String>,
        #[arg(long)]
        uppercase_labels: bool,
    },
    /// List positive and negative comments for the current selection
    Comments {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        clinic: Option<String>,
        #[arg(long)]
        physician: Option<String>,
        #[arg(long)]
        uppercase_labels: bool,
    },
    /// Generate a markdown report for the current selection
    Report {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        clinic: Option<String>,
        #[arg(long)]
        physician: Option<String>,
        #[arg(long)]
        uppercase_labels: bool,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
        /// Credential file; when set, a valid sign-in is required
        #[arg(long)]
        users: Option<PathBuf>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Create a new account in the credential file
    Register {
        #[arg(long)]
        users: PathBuf,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Verify a username and password against the credential file
    Login {
        #[arg(long)]
        users: PathBuf,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Write a small sample feedback file
    Seed {
        #[arg(long, default_value = "feedback.csv")]
        out: PathBuf,
    },
}

fn resolve_csv(csv: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match csv {
        Some(path) => Ok(path),
        None => std::env::var("FEEDBACK_CSV")
            .map(PathBuf::from)
            .context("pass --csv or set FEEDBACK_CSV to the feedback spreadsheet export"),
    }
}

fn labels_for(uppercase: bool) -> SentimentLabels {
    if uppercase {
        SentimentLabels::uppercase()
    } else {
        SentimentLabels::default()
    }
}

fn load_selection(
    csv: Option<PathBuf>,
    clinic: Option<String>,
    physician: Option<String>,
) -> anyhow::Result<(FilterCriteria, Vec<FeedbackRecord>)> {
    let path = resolve_csv(csv)?;
    let records = loader::load(&path)?;
    let criteria = FilterCriteria::from_selections(clinic, physician);
    let filtered = filter::apply(&records, &criteria);
    Ok((criteria, filtered))
}

fn write_seed(out: &Path) -> anyhow::Result<usize> {
    let rows = [
        ("Northside", "Dr. Shah", "Check-in was quick and the staff were friendly", "front desk", "positive", "0.86"),
        ("Northside", "Dr. Shah", "Waited over an hour past my appointment time", "waiting room", "negative", "-0.71"),
        ("Northside", "Dr. Imai", "Dr. Imai explained every step of the treatment", "consultation", "positive", "0.92"),
        ("Northside", "Dr. Imai", "The billing statement was confusing", "billing", "negative", "-0.55"),
        ("Eastgate", "Dr. Alvarez", "Scheduling online was straightforward", "scheduling", "positive", "0.64"),
        ("Eastgate", "Dr. Alvarez", "Reception desk seemed understaffed", "front desk", "negative", "-0.48"),
        ("Eastgate", "Dr. Shah", "Average visit, nothing stood out", "consultation", "neutral", "0.02"),
        ("Riverview", "Dr. Osei", "Follow-up call answered all my questions", "consultation", "positive", "0.78"),
    ];

    let mut writer = csv::Writer::from_path(out)?;
    writer.write_record([
        "Clinic",
        "Physician",
        "Comment",
        "class",
        "sentiment",
        "sentiment_score",
    ])?;
    for (clinic, physician, comment, class, sentiment, score) in rows {
        writer.write_record([clinic, physician, comment, class, sentiment, score])?;
    }
    writer.flush()?;

    Ok(rows.len())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Clinics { csv } => {
            let path = resolve_csv(csv)?;
            let records = loader::load(&path)?;
            let clinics = filter::available_clinics(&records);

            if clinics.is_empty() {
                println!("No clinics found in the feedback data.");
                return Ok(());
            }
            for clinic in clinics {
                println!("- {clinic}");
            }
        }
        Commands::Physicians { csv, clinic } => {
            let path = resolve_csv(csv)?;
            let records = loader::load(&path)?;
            let clinic = clinic.filter(|value| value != "All");
            let physicians = filter::available_physicians(&records, clinic.as_deref());

            if physicians.is_empty() {
                println!("No physicians found for this selection.");
                return Ok(());
            }
            for physician in physicians {
                println!("- {physician}");
            }
        }
        Commands::Summary {
            csv,
            clinic,
            physician,
            uppercase_labels,
        } => {
            let (_, filtered) = load_selection(csv, clinic, physician)?;
            let labels = labels_for(uppercase_labels);

            match sentiment::count_by_sentiment(&filtered, &labels) {
                None => println!("{}", report::NO_CHART_DATA),
                Some(counts) => {
                    println!("Sentiment counts by touch point:");
                    for row in counts {
                        println!(
                            "- {}: {} positive / {} negative",
                            row.class, row.positive, row.negative
                        );
                    }
                    if let Some(totals) = sentiment::overall_distribution(&filtered, &labels) {
                        println!(
                            "Overall: {} positive, {} negative across {} comments",
                            totals.positive,
                            totals.negative,
                            totals.total()
                        );
                    }
                }
            }
        }
        Commands::Comments {
            csv,
            clinic,
            physician,
            uppercase_labels,
        } => {
            let (_, filtered) = load_selection(csv, clinic, physician)?;
            let labels = labels_for(uppercase_labels);
            let (positive, negative) = sentiment::partition_comments(&filtered, &labels);

            println!("Positive comments:");
            if positive.is_empty() {
                println!("{}", report::NO_POSITIVE_COMMENTS);
            } else {
                for record in positive {
                    println!(
                        "- {} (Physician: {}, Clinic: {})",
                        record.comment, record.physician, record.clinic
                    );
                }
            }

            println!("Negative comments:");
            if negative.is_empty() {
                println!("{}", report::NO_NEGATIVE_COMMENTS);
            } else {
                for record in negative {
                    println!(
                        "- {} (Physician: {}, Clinic: {})",
                        record.comment, record.physician, record.clinic
                    );
                }
            }
        }
        Commands::Report {
            csv,
            clinic,
            physician,
            uppercase_labels,
            out,
            users,
            username,
            password,
        } => {
            let session = match users {
                Some(users_path) => {
                    let username =
                        username.context("--username is required when --users is set")?;
                    let password =
                        password.context("--password is required when --users is set")?;
                    let store = auth::CredentialStore::load(&users_path)?;
                    store.authenticate(&username, &password)?
                }
                None => auth::Session::anonymous(),
            };

            let (criteria, filtered) = load_selection(csv, clinic, physician)?;
            let labels = labels_for(uppercase_labels);
            let generated = chrono::Utc::now().date_naive();
            let report = report::build_report(
                &criteria,
                generated,
                &filtered,
                &labels,
                &TemplateRecommender,
                &session,
            );

            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Register {
            users,
            username,
            password,
            confirm,
        } => {
            let mut store = auth::CredentialStore::load(&users)?;
            store.register(&username, &password, &confirm)?;
            store.save(&users)?;
            println!("Account {username} created.");
        }
        Commands::Login {
            users,
            username,
            password,
        } => {
            let store = auth::CredentialStore::load(&users)?;
            let session = store.authenticate(&username, &password)?;
            println!(
                "Signed in as {}.",
                session.user.as_deref().unwrap_or(&username)
            );
        }
        Commands::Seed { out } => {
            let written = write_seed(&out)?;
            println!("Wrote {written} sample feedback rows to {}.", out.display());
        }
    }

    Ok(())
}
