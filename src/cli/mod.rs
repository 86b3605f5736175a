//! Command-line front end
//!
//! Each command maps to one console screen. Before touching the API a
//! command runs its screen through the route guard exactly as a navigation
//! would; a denial prints the redirect outcome and nothing is fetched.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::warn;

use crate::api::client::{ApiClient, NullNavigator};
use crate::api::endpoints::export::ExportResource;
use crate::api::types::{ActivityLogFilter, ListFilter};
use crate::auth::guard::{self, GuardDecision, RouteRequest};
use crate::auth::permissions::{self, keys};
use crate::auth::roles::Role;
use crate::auth::routes::Route;
use crate::auth::session::{Credentials, IdentityPatch, Session, SessionStore};
use crate::auth::storage::FileSessionStorage;
use crate::config::Settings;
use crate::screens::{self, ScreenQuery};

#[derive(Debug, Parser)]
#[command(name = "qxp-admin", version, about = "QuickXPos admin console")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and persist the session
    Login {
        /// Account role: super_admin or reseller
        #[arg(long)]
        role: Role,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and delete the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// Dashboard figures for the signed-in role
    Dashboard,
    /// Salon directory
    Salons {
        #[command(subcommand)]
        command: SalonCommand,
    },
    /// License desk
    Licenses {
        #[command(subcommand)]
        command: LicenseCommand,
    },
    /// Reseller management (super admin)
    Resellers {
        #[command(subcommand)]
        command: ResellerCommand,
    },
    /// Account profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Download a CSV export (super admin)
    Export {
        /// resellers, salons, licenses or activity-logs
        resource: ExportResource,
        /// Output file; defaults to <resource>-<date>.csv
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args, Default)]
struct ListArgs {
    #[arg(long)]
    page: Option<u64>,
    #[arg(long)]
    limit: Option<u64>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    reseller: Option<String>,
    #[arg(long)]
    category: Option<String>,
}

impl ListArgs {
    fn to_filter(&self) -> ListFilter {
        ListFilter {
            page: self.page,
            limit: self.limit,
            search: self.search.clone(),
            status: self.status.clone(),
            reseller_id: self.reseller.clone(),
            business_category: self.category.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum SalonCommand {
    List(ListArgs),
    Show {
        id: String,
    },
    /// Create a salon from a JSON document (super admin)
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    ExtendPlan {
        id: String,
        #[arg(long)]
        data: String,
    },
    DeactivateKey {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum LicenseCommand {
    /// Generate a license from a JSON document
    Generate {
        #[arg(long)]
        data: String,
    },
    /// Pending license requests awaiting review
    Pending,
    Approve {
        id: String,
    },
    Reject {
        id: String,
    },
    /// License activity log
    Activity {
        #[arg(long)]
        page: Option<u64>,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        event_type: Option<String>,
        #[arg(long)]
        salon: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum ResellerCommand {
    List(ListArgs),
    Show { id: String },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete { id: String },
    Toggle { id: String },
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    let storage = Arc::new(FileSessionStorage::new(settings.session_file.clone()));
    let session = Arc::new(SessionStore::new(storage));
    session.hydrate();
    let client = ApiClient::new(&settings, session.clone(), Arc::new(NullNavigator))?;

    match cli.command {
        Command::Login {
            role,
            email,
            password,
        } => login(&client, &session, role, &email, &password).await,
        Command::Logout => logout(&client, &session).await,
        Command::Whoami => {
            whoami(&session);
            Ok(())
        }
        Command::Dashboard => {
            let Some(role) = enter(&session, Route::Dashboard) else {
                return Ok(());
            };
            let view = screens::dashboard::load(&client, role).await;
            render_query("stats", &view.stats, |stats| {
                println!("  salons:     {}", count(stats.total_salons));
                println!("  active:     {}", count(stats.active_count));
                println!("  resellers:  {}", count(stats.total_resellers));
                println!("  pending:    {}", count(stats.pending_requests));
                if let Some(revenue) = stats.total_revenue {
                    println!("  revenue:    {revenue:.2}");
                }
            });
            render_query("recent activity", &view.recent_activity, render_value);
            Ok(())
        }
        Command::Salons { command } => salons(&client, &session, command).await,
        Command::Licenses { command } => licenses(&client, &session, command).await,
        Command::Resellers { command } => resellers(&client, &session, command).await,
        Command::Profile { command } => profile(&client, &session, command).await,
        Command::Export { resource, out } => export(&client, &session, resource, out).await,
    }
}

async fn login(
    client: &ApiClient,
    session: &SessionStore,
    role: Role,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let outcome = match role {
        Role::SuperAdmin => client.login_super_admin(email, password).await?,
        Role::Reseller => client.login_reseller(email, password).await?,
    };
    let name = outcome.user.name.clone();
    session.set_credentials(Credentials {
        user: outcome.user,
        role: outcome.role,
        permissions: outcome.permissions,
        token: outcome.token,
        refresh_token: outcome.refresh_token,
    });
    println!("signed in as {name} ({role})");
    Ok(())
}

async fn logout(client: &ApiClient, session: &SessionStore) -> anyhow::Result<()> {
    // Best effort: the local session is cleared even if the backend call
    // fails.
    let result = match session.role() {
        Some(Role::SuperAdmin) => client.logout_super_admin().await,
        Some(Role::Reseller) => client.logout_reseller().await,
        None => Ok(()),
    };
    if let Err(err) = result {
        warn!("backend logout failed: {err}");
    }
    session.logout();
    println!("signed out");
    Ok(())
}

fn whoami(session: &SessionStore) {
    let snapshot = session.snapshot();
    if !snapshot.is_authenticated {
        println!("not signed in");
        return;
    }
    if let Some(user) = &snapshot.user {
        println!("{} <{}>", user.name, user.email);
    }
    if let Some(role) = snapshot.role {
        println!("role: {role}");
    }
    let mut granted: Vec<&str> = snapshot
        .permissions
        .iter()
        .filter(|(_, allowed)| **allowed)
        .map(|(key, _)| key.as_str())
        .collect();
    granted.sort_unstable();
    println!("permissions: {}", granted.join(", "));
}

async fn salons(
    client: &ApiClient,
    session: &SessionStore,
    command: SalonCommand,
) -> anyhow::Result<()> {
    let route = match command {
        SalonCommand::List(_) => Route::UserManagement,
        _ => Route::ManageUser,
    };
    let Some(role) = enter(session, route) else {
        return Ok(());
    };

    match command {
        SalonCommand::List(args) => {
            let query = screens::salons::list(client, role, &args.to_filter()).await;
            render_query("salons", &query, |page| {
                for salon in &page.items {
                    println!(
                        "  {}  {}  [{}]",
                        salon.id,
                        salon.name,
                        salon.status.as_deref().unwrap_or("-")
                    );
                }
                render_pagination(&page.pagination);
            });
        }
        SalonCommand::Show { id } => {
            let query = screens::salons::detail(client, role, &id).await;
            render_query("salon", &query, |salon| render_json(salon));
        }
        SalonCommand::Create { data } => {
            let salon = screens::salons::create(client, role, parse_data(&data)?).await?;
            println!("created salon {}", salon.id);
        }
        SalonCommand::Update { id, data } => {
            let salon = screens::salons::update(client, role, &id, parse_data(&data)?).await?;
            println!("updated salon {}", salon.id);
        }
        SalonCommand::ExtendPlan { id, data } => {
            screens::salons::extend_plan(client, role, &id, parse_data(&data)?).await?;
            println!("extended plan for salon {id}");
        }
        SalonCommand::DeactivateKey { id } => {
            screens::salons::deactivate_key(client, role, &id).await?;
            println!("deactivated license key for salon {id}");
        }
    }
    Ok(())
}

async fn licenses(
    client: &ApiClient,
    session: &SessionStore,
    command: LicenseCommand,
) -> anyhow::Result<()> {
    let Some(role) = enter(session, Route::LicenseManagement) else {
        return Ok(());
    };

    match command {
        LicenseCommand::Generate { data } => {
            let generated = screens::licenses::generate(client, role, parse_data(&data)?).await?;
            println!(
                "generated license {}",
                generated.license.license_key.as_deref().unwrap_or("(no key)")
            );
            if let Some(expiry) = generated.license.expiry_date {
                println!("expires {expiry}");
            }
        }
        LicenseCommand::Pending => {
            let query = screens::licenses::pending(client, role).await;
            render_query("pending requests", &query, |requests| {
                for request in requests {
                    println!(
                        "  {}  {}  [{}]",
                        request.id,
                        request.salon_name.as_deref().unwrap_or("-"),
                        request.status.as_deref().unwrap_or("pending")
                    );
                }
            });
        }
        LicenseCommand::Approve { id } => {
            screens::licenses::approve(client, role, &id).await?;
            println!("approved request {id}");
        }
        LicenseCommand::Reject { id } => {
            screens::licenses::reject(client, role, &id).await?;
            println!("rejected request {id}");
        }
        LicenseCommand::Activity {
            page,
            limit,
            event_type,
            salon,
        } => {
            let filter = ActivityLogFilter {
                page,
                limit,
                event_type,
                salon_id: salon,
            };
            let query = screens::licenses::activity(client, role, &filter).await;
            render_query("activity", &query, |page| {
                for entry in &page.items {
                    println!(
                        "  {}  {}  {}",
                        entry
                            .timestamp
                            .map(|ts| ts.to_rfc3339())
                            .unwrap_or_else(|| "-".into()),
                        entry.event_type.as_deref().unwrap_or("-"),
                        entry.message.as_deref().unwrap_or("")
                    );
                }
                render_pagination(&page.pagination);
            });
        }
    }
    Ok(())
}

async fn resellers(
    client: &ApiClient,
    session: &SessionStore,
    command: ResellerCommand,
) -> anyhow::Result<()> {
    let Some(role) = enter(session, Route::ResellerManagement) else {
        return Ok(());
    };

    match command {
        ResellerCommand::List(args) => {
            let query = screens::resellers::list(client, role, &args.to_filter()).await;
            render_query("resellers", &query, |page| {
                for reseller in &page.items {
                    println!(
                        "  {}  {}  [{}]",
                        reseller.id,
                        reseller.name,
                        reseller.status.as_deref().unwrap_or("-")
                    );
                }
                render_pagination(&page.pagination);
            });
        }
        ResellerCommand::Show { id } => {
            let query = screens::resellers::detail(client, role, &id).await;
            render_query("reseller", &query, |reseller| render_json(reseller));
        }
        ResellerCommand::Create { data } => {
            let reseller = screens::resellers::create(client, role, parse_data(&data)?).await?;
            println!("created reseller {}", reseller.id);
        }
        ResellerCommand::Update { id, data } => {
            let reseller =
                screens::resellers::update(client, role, &id, parse_data(&data)?).await?;
            println!("updated reseller {}", reseller.id);
        }
        ResellerCommand::Delete { id } => {
            screens::resellers::remove(client, role, &id).await?;
            println!("deleted reseller {id}");
        }
        ResellerCommand::Toggle { id } => {
            let reseller = screens::resellers::toggle_status(client, role, &id).await?;
            println!(
                "reseller {} is now {}",
                reseller.id,
                reseller.status.as_deref().unwrap_or("updated")
            );
        }
    }
    Ok(())
}

async fn profile(
    client: &ApiClient,
    session: &SessionStore,
    command: ProfileCommand,
) -> anyhow::Result<()> {
    let Some(role) = enter(session, Route::Profile) else {
        return Ok(());
    };

    match command {
        ProfileCommand::Show => {
            let query = screens::profile::load(client, role).await;
            render_query("profile", &query, |outcome| {
                println!("  {} <{}>", outcome.user.name, outcome.user.email);
                println!("  role: {}", outcome.role);
                if let Some(contact) = &outcome.user.contact {
                    println!("  contact: {contact}");
                }
                if let Some(city) = &outcome.user.city {
                    println!("  city: {city}");
                }
            });
        }
        ProfileCommand::Update {
            name,
            email,
            contact,
            address,
            city,
        } => {
            let patch = IdentityPatch {
                name,
                email,
                contact,
                address,
                city,
            };
            screens::profile::update(client, session, role, patch).await?;
            println!("profile updated");
        }
    }
    Ok(())
}

async fn export(
    client: &ApiClient,
    session: &SessionStore,
    resource: ExportResource,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    if enter(session, Route::Dashboard).is_none() {
        return Ok(());
    }
    // Passing the dashboard guard is not enough: exports need their own grant.
    if !may_export(&session.snapshot()) {
        println!("not allowed here: redirected to {}", Route::LANDING.path());
        return Ok(());
    }

    let bytes = client.export_csv(resource).await?;
    let path = out.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}-{}.csv",
            resource.as_str(),
            Utc::now().format("%Y-%m-%d")
        ))
    });
    std::fs::write(&path, &bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Run the guard for a route. Returns the session role on render; prints
/// the redirect outcome and returns `None` on denial.
fn may_export(session: &Session) -> bool {
    permissions::has_permission(&session.permissions, keys::EXPORT_DATA, session.role)
}

fn enter(session: &SessionStore, route: Route) -> Option<Role> {
    let snapshot = session.snapshot();
    match guard::decide(&snapshot, &RouteRequest::new(route)) {
        GuardDecision::Render => snapshot.role,
        GuardDecision::RedirectToLogin { return_to } => {
            println!(
                "not signed in: redirected to {} (would resume at {})",
                Route::Login.path(),
                return_to.path()
            );
            None
        }
        GuardDecision::RedirectToLanding => {
            println!(
                "not allowed here: redirected to {}",
                Route::LANDING.path()
            );
            None
        }
    }
}

fn parse_data(raw: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(raw).context("--data must be valid JSON")?;
    if !value.is_object() {
        bail!("--data must be a JSON object");
    }
    Ok(value)
}

fn render_query<T>(label: &str, query: &ScreenQuery<T>, render: impl FnOnce(&T)) {
    match query {
        ScreenQuery::Ready(data) => {
            println!("{label}:");
            render(data);
        }
        ScreenQuery::Skipped => {}
        ScreenQuery::Failed(err) => println!("{label}: error: {err}"),
    }
}

fn render_pagination(pagination: &Option<crate::api::envelope::Pagination>) {
    if let Some(pagination) = pagination {
        println!(
            "  page {} of {} ({} total)",
            pagination.page.unwrap_or(1),
            pagination.total_pages.unwrap_or(1),
            pagination.total.unwrap_or(0)
        );
    }
}

fn render_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => println!("failed to render: {err}"),
    }
}

fn render_value(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => println!("failed to render: {err}"),
    }
}

fn count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}
