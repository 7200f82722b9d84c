//! PDF rendering of a [`StoryLayout`] with `lopdf`.
//!
//! The document uses the standard Type1 Courier font, so no font program is
//! embedded and text must be single-byte. Characters outside Latin-1 are
//! written as `?`.

use genie_core::UserStory;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

use crate::TITLE;
use crate::error::ExportError;
use crate::layout::{PT_PER_MM, Page, PageMetrics, StoryLayout};

const FONT_KEY: &str = "F1";

/// Render `stories` as a paginated PDF document.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] if a content stream cannot be encoded or the
/// document cannot be serialized.
pub fn render_pdf(stories: &[UserStory]) -> Result<Vec<u8>, ExportError> {
    let layout = StoryLayout::paginate(TITLE, stories);
    render_layout(&layout)
}

/// Serialize an already paginated layout.
///
/// # Errors
///
/// See [`render_pdf`].
pub fn render_layout(layout: &StoryLayout) -> Result<Vec<u8>, ExportError> {
    let metrics = layout.metrics;
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { FONT_KEY => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let page_id = add_page(&mut doc, pages_id, &metrics, page)?;
        kids.push(page_id.into());
    }

    let page_count = i64::try_from(kids.len()).map_err(|e| ExportError::Pdf(e.to_string()))?;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (metrics.width_mm * PT_PER_MM).into(),
            (metrics.height_mm * PT_PER_MM).into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(bytes)
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    metrics: &PageMetrics,
    page: &Page,
) -> Result<ObjectId, ExportError> {
    let mut operations = Vec::with_capacity(page.lines.len() * 4);
    for line in &page.lines {
        let x = line.x_mm * PT_PER_MM;
        let y = (metrics.height_mm - line.baseline_mm) * PT_PER_MM;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![FONT_KEY.into(), metrics.font_size_pt.into()],
        ));
        operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(latin1(&line.text), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations }
        .encode()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    }))
}

/// Encode `text` as single-byte Latin-1, substituting `?` for anything else.
///
/// C1 controls are replaced too; `WinAnsiEncoding` draws glyphs in that range.
pub(crate) fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(0x80..=0x9F) | Err(_) => b'?',
            Ok(byte) => byte,
        })
        .collect()
}
