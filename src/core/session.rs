//! Draft/preview controller for a single invoice.
//!
//! ```text
//!            Calculate, Clear, edits
//!               ┌───────┐
//!               ▼       │
//!           ┌─────────────┐   Generate   ┌──────────────┐
//!  start ──▶│   Editing   │─────────────▶│  Previewing  │
//!           └─────────────┘◀─────────────└──────────────┘
//!                               Back
//! ```

use chrono::{DateTime, TimeZone};
use rand::Rng;

use super::assets::Assets;
use super::document::InvoiceDocument;
use super::error::InvoiceError;
use super::types::{CalculatedAmounts, Field, InvoiceInput, InvoiceSnapshot};

/// Which surface is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The form is shown; the draft can be edited.
    Editing,
    /// The document is shown for a frozen snapshot.
    Previewing(InvoiceSnapshot),
}

impl Mode {
    fn name(&self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Previewing(_) => "previewing",
        }
    }
}

/// In-memory session: one draft, its last calculated summary, and the
/// document snapshot while previewing.
#[derive(Debug, Clone)]
pub struct Session {
    draft: InvoiceInput,
    show_gstin: bool,
    show_address: bool,
    summary: Option<CalculatedAmounts>,
    mode: Mode,
    assets: Assets,
}

impl Session {
    /// Start a session with a default draft. `assets` is the result of the
    /// one-time logo/signature load.
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>, assets: Assets) -> Self {
        Self::with_draft(InvoiceInput::new_draft(now), assets)
    }

    /// Start a session from an existing draft.
    pub fn with_draft(draft: InvoiceInput, assets: Assets) -> Self {
        tracing::debug!(invoice_no = %draft.invoice_no, "session started");
        Self {
            draft,
            show_gstin: false,
            show_address: false,
            summary: None,
            mode: Mode::Editing,
            assets,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing)
    }

    pub fn draft(&self) -> &InvoiceInput {
        &self.draft
    }

    /// Mutable draft access; only while editing.
    pub fn draft_mut(&mut self) -> Result<&mut InvoiceInput, InvoiceError> {
        self.require_editing("edit")?;
        Ok(&mut self.draft)
    }

    /// Store a raw form value; see [`InvoiceInput::set_field`].
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), InvoiceError> {
        self.draft_mut()?.set_field(field, raw);
        Ok(())
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Last result of Calculate or Generate.
    pub fn summary(&self) -> Option<&CalculatedAmounts> {
        self.summary.as_ref()
    }

    /// Frozen snapshot while previewing.
    pub fn preview(&self) -> Option<&InvoiceSnapshot> {
        match &self.mode {
            Mode::Previewing(snapshot) => Some(snapshot),
            Mode::Editing => None,
        }
    }

    /// Document for the frozen snapshot; `None` while editing.
    pub fn document(&self) -> Option<InvoiceDocument> {
        self.preview()
            .map(|snapshot| InvoiceDocument::new(snapshot, &self.assets))
    }

    /// Whether the GSTIN input is shown on the form. Display only: a hidden
    /// GSTIN keeps its value and still reaches the document.
    pub fn show_gstin(&self) -> bool {
        self.show_gstin
    }

    /// Whether the address input is shown on the form. Display only.
    pub fn show_address(&self) -> bool {
        self.show_address
    }

    pub fn set_show_gstin(&mut self, show: bool) -> Result<(), InvoiceError> {
        self.require_editing("toggle GSTIN")?;
        self.show_gstin = show;
        Ok(())
    }

    pub fn set_show_address(&mut self, show: bool) -> Result<(), InvoiceError> {
        self.require_editing("toggle address")?;
        self.show_address = show;
        Ok(())
    }

    pub fn toggle_gstin(&mut self) -> Result<bool, InvoiceError> {
        self.set_show_gstin(!self.show_gstin)?;
        Ok(self.show_gstin)
    }

    pub fn toggle_address(&mut self) -> Result<bool, InvoiceError> {
        self.set_show_address(!self.show_address)?;
        Ok(self.show_address)
    }

    /// Editing → Editing: refresh the summary without freezing anything.
    pub fn calculate(&mut self) -> Result<CalculatedAmounts, InvoiceError> {
        self.require_editing("calculate")?;
        let amounts = self.draft.calculate();
        tracing::debug!(
            total = %amounts.total_amount,
            gst = %amounts.gst_amount,
            "calculated summary"
        );
        self.summary = Some(amounts);
        Ok(amounts)
    }

    /// Editing → Previewing: calculate again and freeze a copy of the draft
    /// together with the result.
    pub fn generate(&mut self) -> Result<CalculatedAmounts, InvoiceError> {
        self.require_editing("generate")?;
        let amounts = self.draft.calculate();
        self.summary = Some(amounts);
        tracing::debug!(invoice_no = %self.draft.invoice_no, "generated invoice");
        self.mode = Mode::Previewing(InvoiceSnapshot {
            input: self.draft.clone(),
            amounts,
        });
        Ok(amounts)
    }

    /// Previewing → Editing: drop the snapshot, keep the draft as edited.
    pub fn back(&mut self) -> Result<(), InvoiceError> {
        if self.is_editing() {
            return Err(InvoiceError::InvalidTransition {
                action: "back",
                mode: self.mode.name(),
            });
        }
        tracing::debug!("back to editing");
        self.mode = Mode::Editing;
        Ok(())
    }

    /// Editing → Editing: fresh default draft with new invoice/order numbers,
    /// optional inputs hidden again.
    pub fn clear<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<(), InvoiceError> {
        self.clear_with_rng(now, &mut rand::thread_rng())
    }

    /// [`Session::clear`] with an explicit random source.
    pub fn clear_with_rng<Tz: TimeZone, R: Rng>(
        &mut self,
        now: &DateTime<Tz>,
        rng: &mut R,
    ) -> Result<(), InvoiceError> {
        self.require_editing("clear")?;
        self.draft = InvoiceInput::new_draft_with_rng(now, rng);
        self.show_gstin = false;
        self.show_address = false;
        tracing::debug!(invoice_no = %self.draft.invoice_no, "draft cleared");
        Ok(())
    }

    fn require_editing(&self, action: &'static str) -> Result<(), InvoiceError> {
        match self.mode {
            Mode::Editing => Ok(()),
            Mode::Previewing(_) => Err(InvoiceError::InvalidTransition {
                action,
                mode: self.mode.name(),
            }),
        }
    }
}
