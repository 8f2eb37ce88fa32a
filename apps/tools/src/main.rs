use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{config::load_settings, HttpGuestLinkClient};
use tracing_subscriber::EnvFilter;
use web_portal::{
    view::FormSnapshot, GuestLinkFormController, MemoryFormView, ProgrammaticSubmit,
    SubmissionOutcome,
};

/// Requests a guest link the way the portal form does.
#[derive(Parser, Debug)]
#[command(name = "guest-link")]
struct Cli {
    /// Target URL the guest link grants access to.
    #[arg(long)]
    url: String,
    /// Lifetime of the link in days, forwarded unvalidated.
    #[arg(long)]
    expiration_days: String,
    /// Portal page URL; defaults to guest_link.toml or the environment.
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    let endpoint = settings
        .endpoint()
        .with_context(|| format!("invalid portal url {:?}", settings.server_url))?;
    let client = HttpGuestLinkClient::new(endpoint);

    let view = MemoryFormView::with_fields(cli.url, cli.expiration_days);
    let controller = GuestLinkFormController::new(&view, client);
    let outcome = controller.handle_submit(&ProgrammaticSubmit).await;

    print!("{}", render_regions(&view.snapshot()));
    match outcome {
        SubmissionOutcome::Success(_) => Ok(()),
        SubmissionOutcome::Failure(err) => {
            bail!("guest link request failed ({:?})", err.category())
        }
    }
}

fn visibility(visible: bool) -> &'static str {
    if visible {
        "shown"
    } else {
        "hidden"
    }
}

/// Text rendering of the form regions after a cycle.
fn render_regions(snapshot: &FormSnapshot) -> String {
    let mut out = format!(
        "output: {}\n",
        visibility(snapshot.output_container_visible)
    );
    if snapshot.output_container_visible {
        out.push_str(&format!("  {}\n", snapshot.output_text));
    }
    out.push_str(&format!("error: {}\n", visibility(snapshot.error_visible)));
    out.push_str(&format!(
        "submit: {}\n",
        if snapshot.submit_enabled {
            "enabled"
        } else {
            "disabled"
        }
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_portal::{FormView, Region};

    #[test]
    fn renders_link_under_visible_output() {
        let view = MemoryFormView::new();
        view.show(Region::OutputContainer);
        view.set_output_text("https://host/g/abc123");

        assert_eq!(
            render_regions(&view.snapshot()),
            "output: shown\n  https://host/g/abc123\nerror: hidden\nsubmit: enabled\n"
        );
    }

    #[test]
    fn hides_stale_output_text_when_region_is_hidden() {
        let view = MemoryFormView::new();
        view.set_output_text("https://host/g/stale");
        view.show(Region::Error);

        assert_eq!(
            render_regions(&view.snapshot()),
            "output: hidden\nerror: shown\nsubmit: enabled\n"
        );
    }
}
