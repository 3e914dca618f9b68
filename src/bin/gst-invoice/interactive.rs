use std::fmt;

use anyhow::Result;
use chrono::Local;
use gst_invoice::core::{Assets, Field, Session, format_amount};
use inquire::{InquireError, Select, Text};

use crate::config::Settings;
use crate::output::{self, Format};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditAction {
    EditField,
    ToggleGstin,
    ToggleAddress,
    Calculate,
    Generate,
    Clear,
    Quit,
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EditField => "Edit a field",
            Self::ToggleGstin => "Show/hide GSTIN",
            Self::ToggleAddress => "Show/hide address",
            Self::Calculate => "Calculate",
            Self::Generate => "Generate Invoice",
            Self::Clear => "Clear",
            Self::Quit => "Quit",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreviewAction {
    Save(Format),
    Back,
    Quit,
}

impl fmt::Display for PreviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Save(Format::Text) => f.write_str("Save as text"),
            Self::Save(Format::Html) => f.write_str("Save as HTML"),
            Self::Save(Format::Pdf) => f.write_str("Save as PDF"),
            Self::Back => f.write_str("Back to editing"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

/// A form field offered for editing, shown with its current value.
struct FieldChoice {
    field: Field,
    value: String,
}

impl fmt::Display for FieldChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.value)
    }
}

/// `Ok(None)` when the user pressed Esc or Ctrl-C.
fn answer<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn run(settings: &Settings) -> Result<()> {
    let assets = Assets::load(&settings.logo_path, &settings.signature_path);
    let mut session = Session::new(&Local::now(), assets);

    loop {
        let keep_going = if session.is_editing() {
            editing_step(&mut session)?
        } else {
            preview_step(&mut session, settings)?
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn editing_step(session: &mut Session) -> Result<bool> {
    println!();
    println!("Invoice {}  ({})", session.draft().invoice_no, session.draft().date);
    if let Some(summary) = session.summary() {
        println!(
            "Last summary: taxable {}, GST {}, total {}",
            format_amount(summary.taxable_amount),
            format_amount(summary.gst_amount),
            format_amount(summary.total_amount)
        );
    }

    let actions = vec![
        EditAction::EditField,
        EditAction::ToggleGstin,
        EditAction::ToggleAddress,
        EditAction::Calculate,
        EditAction::Generate,
        EditAction::Clear,
        EditAction::Quit,
    ];
    let Some(action) = answer(Select::new("Action:", actions).prompt())? else {
        return Ok(false);
    };

    match action {
        EditAction::EditField => edit_field(session)?,
        EditAction::ToggleGstin => {
            let shown = session.toggle_gstin()?;
            println!("GSTIN field {}", if shown { "shown" } else { "hidden" });
        }
        EditAction::ToggleAddress => {
            let shown = session.toggle_address()?;
            println!("Address field {}", if shown { "shown" } else { "hidden" });
        }
        EditAction::Calculate => {
            let amounts = session.calculate()?;
            println!("{}", output::summary_table(&amounts));
        }
        EditAction::Generate => {
            session.generate()?;
        }
        EditAction::Clear => session.clear(&Local::now())?,
        EditAction::Quit => return Ok(false),
    }
    Ok(true)
}

fn edit_field(session: &mut Session) -> Result<()> {
    let draft = session.draft();
    let choices: Vec<FieldChoice> = Field::ALL
        .into_iter()
        .filter(|field| match field {
            Field::CustomerGstin => session.show_gstin(),
            Field::CustomerAddress => session.show_address(),
            _ => true,
        })
        .map(|field| FieldChoice {
            field,
            value: draft.field_value(field),
        })
        .collect();

    let Some(choice) = answer(Select::new("Field:", choices).prompt())? else {
        return Ok(());
    };
    let prompt = format!("{}:", choice.field.label());
    let Some(raw) = answer(Text::new(&prompt).with_initial_value(&choice.value).prompt())? else {
        return Ok(());
    };
    session.set_field(choice.field, &raw)?;
    Ok(())
}

fn preview_step(session: &mut Session, settings: &Settings) -> Result<bool> {
    let Some(doc) = session.document() else {
        return Ok(true);
    };
    println!();
    println!("{}", doc.to_text());

    let actions = vec![
        PreviewAction::Save(Format::Pdf),
        PreviewAction::Save(Format::Html),
        PreviewAction::Save(Format::Text),
        PreviewAction::Back,
        PreviewAction::Quit,
    ];
    let Some(action) = answer(Select::new("Invoice:", actions).prompt())? else {
        return Ok(false);
    };

    match action {
        PreviewAction::Save(format) => {
            let path = output::write_document(&doc, format, None, &settings.output_dir)?;
            println!("Saved {}", path.display());
        }
        PreviewAction::Back => session.back()?,
        PreviewAction::Quit => return Ok(false),
    }
    Ok(true)
}
