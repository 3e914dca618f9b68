//! Single-page A4 PDF output.
//!
//! Text is set in the standard Times-Roman / Times-Bold fonts, so only
//! printable ASCII survives; other characters print as `?`. Images are
//! decoded through lopdf's `embed_image` support and skipped with a warning
//! when they cannot be decoded.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use crate::core::document::{BILL_TO_HEADING, DESCRIPTION_HEADING};
use crate::core::{AssetImage, InvoiceDocument, InvoiceError, SIGNATURE_CAPTION, SignatureSource};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 30.0;
const RIGHT_COLUMN_X: f32 = 400.0;
const AMOUNT_VALUE_X: f32 = 460.0;

const LOGO_SIZE: f32 = 100.0;
const SIGNATURE_SIZE: (f32, f32) = (150.0, 60.0);

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

fn pdf_err(e: lopdf::Error) -> InvoiceError {
    InvoiceError::Render(format!("PDF error: {e}"))
}

/// Render the document as PDF bytes.
pub fn to_pdf(doc: &InvoiceDocument) -> Result<Vec<u8>, InvoiceError> {
    let mut page = PageWriter::new();

    // Letterhead, left column below the logo box
    let mut y = PAGE_HEIGHT - MARGIN - LOGO_SIZE - 24.0;
    page.text(REGULAR, 14.0, MARGIN, y, doc.letterhead.company_name);
    y -= 14.0;
    for line in doc.letterhead.detail_lines() {
        page.text(REGULAR, 9.0, MARGIN, y, &line);
        y -= 11.0;
    }

    // Invoice meta, right column
    let mut meta_y = PAGE_HEIGHT - MARGIN - 10.0;
    for line in &doc.meta {
        page.text(
            REGULAR,
            10.0,
            RIGHT_COLUMN_X,
            meta_y,
            &format!("{}: {}", line.label, line.value),
        );
        meta_y -= 14.0;
    }

    y -= 30.0;
    page.text(BOLD, 16.0, MARGIN, y, &format!("{BILL_TO_HEADING}:"));
    y -= 20.0;
    for line in &doc.bill_to {
        page.text(REGULAR, 9.0, MARGIN, y, &format!("{}: {}", line.label, line.value));
        y -= 11.0;
    }

    y -= 20.0;
    page.text(BOLD, 16.0, MARGIN, y, &format!("{DESCRIPTION_HEADING}:"));
    y -= 20.0;
    page.text(REGULAR, 9.0, MARGIN, y, &doc.description);

    y -= 30.0;
    page.rule(y);
    y -= 20.0;
    for row in &doc.amounts {
        if row.is_total {
            y -= 5.0;
            page.rule(y + 12.0);
            y -= 5.0;
            page.text(BOLD, 12.0, MARGIN, y, &format!("{}:", row.label));
            page.text(BOLD, 12.0, AMOUNT_VALUE_X, y, &row.value);
        } else {
            page.text(REGULAR, 10.0, MARGIN, y, &format!("{}:", row.label));
            page.text(BOLD, 10.0, AMOUNT_VALUE_X, y, &row.value);
        }
        y -= 16.0;
    }

    let signature_y = y - 50.0 - SIGNATURE_SIZE.1;
    let signature_x = PAGE_WIDTH - MARGIN - SIGNATURE_SIZE.0;
    if doc.signature.is_some() {
        page.text(REGULAR, 9.0, signature_x, signature_y - 12.0, SIGNATURE_CAPTION);
    }

    let mut pdf = Document::with_version("1.5");
    let page_id = page.finish(&mut pdf)?;

    if let Some(logo) = &doc.logo {
        let position = (MARGIN, PAGE_HEIGHT - MARGIN - LOGO_SIZE);
        embed_image(&mut pdf, page_id, logo, position, (LOGO_SIZE, LOGO_SIZE), "logo");
    }
    match &doc.signature {
        Some(SignatureSource::Embedded(img)) => {
            embed_image(&mut pdf, page_id, img, (signature_x, signature_y), SIGNATURE_SIZE, "signature");
        }
        Some(SignatureSource::Reference(path)) => {
            tracing::debug!(path = %path.display(), "signature not loaded, drawing caption only");
        }
        None => {}
    }

    let mut output = Vec::new();
    pdf.save_to(&mut output)
        .map_err(|e| InvoiceError::Render(format!("failed to save PDF: {e}")))?;
    tracing::debug!(size = output.len(), "rendered PDF invoice");
    Ok(output)
}

fn embed_image(
    pdf: &mut Document,
    page_id: ObjectId,
    img: &AssetImage,
    position: (f32, f32),
    size: (f32, f32),
    what: &str,
) {
    let result = lopdf::xobject::image_from(img.bytes.clone())
        .and_then(|stream| pdf.insert_image(page_id, stream, position, size));
    if let Err(e) = result {
        tracing::warn!(error = %e, media_type = img.media_type, "skipping {what} image");
    }
}

/// Collects content-stream operations for one page.
struct PageWriter {
    operations: Vec<Operation>,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, text: &str) {
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(ascii_text(text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Thin grey horizontal rule across the text width.
    fn rule(&mut self, y: f32) {
        self.operations.extend([
            Operation::new("q", vec![]),
            Operation::new("RG", vec![0.898_f32.into(), 0.906_f32.into(), 0.922_f32.into()]),
            Operation::new("w", vec![1.into()]),
            Operation::new("m", vec![MARGIN.into(), y.into()]),
            Operation::new("l", vec![(PAGE_WIDTH - MARGIN).into(), y.into()]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Write the page, its fonts and the page tree into `pdf`.
    fn finish(self, pdf: &mut Document) -> Result<ObjectId, InvoiceError> {
        let pages_id = pdf.new_object_id();
        let regular_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Times-Roman",
        });
        let bold_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Times-Bold",
        });

        let content = Content {
            operations: self.operations,
        };
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode().map_err(pdf_err)?));

        // Resources live on the page itself so images added later land next
        // to the fonts.
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    REGULAR => regular_id,
                    BOLD => bold_id,
                },
            },
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        pdf.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);
        Ok(page_id)
    }
}

fn ascii_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}
