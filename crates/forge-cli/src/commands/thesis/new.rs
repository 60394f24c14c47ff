use forge_api::ThesisGateway;
use forge_core::ThesisDraft;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThesisNewArgs;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(
    args: &ThesisNewArgs,
    flags: &GlobalFlags,
    config: &forge_config::ForgeConfig,
) -> anyhow::Result<()> {
    let session = bootstrap::resolve_session(config).await?;
    let token = session
        .current_token()
        .ok_or(forge_auth::AuthError::NotAuthenticated)?
        .to_string();
    let owner_id = session
        .current_user()
        .ok_or(forge_auth::AuthError::NotAuthenticated)?
        .id
        .clone();

    let gateway = ThesisGateway::new(config.api.thesis_base());

    let mut draft = match &args.from {
        Some(id) => ThesisDraft::from_existing(&gateway.get(id, &token).await?),
        None => ThesisDraft::default(),
    };
    apply_args(&mut draft, args);

    // Validation gates the submission; nothing goes over the wire until the
    // draft passes every rule.
    if let Err(invalid) = forge_core::validate::validate(&draft) {
        let mut message = String::from("draft is not valid:\n");
        for issue in &invalid.issues {
            message.push_str(&format!("  - {issue}\n"));
        }
        anyhow::bail!(message.trim_end().to_string());
    }

    let spinner = Progress::spinner("Submitting thesis...");
    let thesis = gateway.create(&draft, &token, &owner_id).await?;
    spinner.finish();

    output(&thesis, flags.format)
}

fn apply_args(draft: &mut ThesisDraft, args: &ThesisNewArgs) {
    if let Some(topic) = &args.topic {
        draft.topic_name = topic.clone();
    }
    if let Some(main_area) = &args.main_area {
        draft.main_area = main_area.clone();
    }
    if let Some(secondary_area) = &args.secondary_area {
        draft.secondary_area = Some(secondary_area.clone());
    }
    if let Some(description) = &args.description {
        draft.topic_description = description.clone();
    }
    if let Some(link) = &args.link {
        draft.external_link = Some(link.clone());
    }
    if let Some(interest) = args.interest {
        draft.personal_interest = interest;
    }
    if let Some(business) = args.business {
        draft.business_potential = business;
    }
    if let Some(open_source) = args.open_source {
        draft.open_source_contribution = open_source;
    }
    if let Some(science) = args.science {
        draft.scientific_value = science;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_args() -> ThesisNewArgs {
        ThesisNewArgs {
            topic: None,
            main_area: None,
            secondary_area: None,
            description: None,
            link: None,
            interest: None,
            business: None,
            open_source: None,
            science: None,
            from: None,
        }
    }

    #[test]
    fn flags_overlay_the_draft() {
        let mut draft = ThesisDraft::default();
        let args = ThesisNewArgs {
            topic: Some("Adaptive batch sizing".into()),
            interest: Some(5),
            ..new_args()
        };
        apply_args(&mut draft, &args);
        assert_eq!(draft.topic_name, "Adaptive batch sizing");
        assert_eq!(draft.personal_interest, 5);
        // Untouched fields keep their defaults.
        assert_eq!(draft.business_potential, 3);
    }

    #[test]
    fn absent_flags_leave_prefill_intact() {
        let mut draft = ThesisDraft {
            topic_name: "From existing thesis".into(),
            ..ThesisDraft::default()
        };
        apply_args(&mut draft, &new_args());
        assert_eq!(draft.topic_name, "From existing thesis");
    }
}
