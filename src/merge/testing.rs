//! Minimal PDFs generated with lopdf for tests.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::path::Path;

const A4_WIDTH: i64 = 595;

/// How the generated page tree is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Every page is a direct kid of the root and carries its own MediaBox.
    Flat,
    /// Like `Flat`, but the MediaBox lives on the root Pages node.
    InheritedMediaBox,
    /// The first page hangs off the root, the others off an intermediate
    /// Pages node.
    Nested,
}

/// A document with `pages` empty A4 pages, each carrying its own MediaBox.
pub fn pdf_document(pages: u32) -> Document {
    build(&a4_widths(pages), Layout::Flat)
}

/// Serialized form of [`pdf_document`].
pub fn pdf_bytes(pages: u32) -> Vec<u8> {
    save(pdf_document(pages))
}

/// One page per entry, each page's MediaBox as wide as the entry.
pub fn pdf_bytes_with_widths(widths: &[i64]) -> Vec<u8> {
    save(build(widths, Layout::Flat))
}

/// Like [`pdf_bytes_with_widths`], with an intermediate Pages node.
pub fn pdf_bytes_nested(widths: &[i64]) -> Vec<u8> {
    save(build(widths, Layout::Nested))
}

/// Like [`pdf_bytes`], but the MediaBox lives on the Pages node and is
/// inherited by the pages.
pub fn pdf_bytes_with_inherited_media_box(pages: u32) -> Vec<u8> {
    save(build(&a4_widths(pages), Layout::InheritedMediaBox))
}

/// Write a generated PDF to `path`.
pub fn write_pdf(path: &Path, pages: u32) {
    std::fs::write(path, pdf_bytes(pages)).expect("write test PDF");
}

/// MediaBox widths of the document's pages, in page order.
pub fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).expect("page dictionary");
            let media_box = page.get(b"MediaBox").and_then(Object::as_array).expect("MediaBox");
            media_box[2].as_i64().expect("integer width")
        })
        .collect()
}

fn a4_widths(pages: u32) -> Vec<i64> {
    vec![A4_WIDTH; pages as usize]
}

fn media_box(width: i64) -> Object {
    Object::Array(vec![0.into(), 0.into(), width.into(), 842.into()])
}

fn build(widths: &[i64], layout: Layout) -> Document {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let inner_id = (layout == Layout::Nested && widths.len() > 1).then(|| doc.new_object_id());

    let resources_id = doc.add_object(dictionary! {
        "ProcSet" => vec![Object::Name(b"PDF".to_vec())],
    });

    let mut root_kids = Vec::new();
    let mut inner_kids = Vec::new();
    for (idx, &width) in widths.iter().enumerate() {
        let parent: ObjectId = match inner_id {
            Some(inner) if idx > 0 => inner,
            _ => root_id,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => parent,
            "Resources" => resources_id,
            "Contents" => content_id,
        };
        if layout != Layout::InheritedMediaBox {
            page.set("MediaBox", media_box(width));
        }

        let page_ref = Object::Reference(doc.add_object(page));
        if parent == root_id {
            root_kids.push(page_ref);
        } else {
            inner_kids.push(page_ref);
        }
    }

    if let Some(inner) = inner_id {
        let inner_dict = dictionary! {
            "Type" => "Pages",
            "Parent" => root_id,
            "Kids" => inner_kids.clone(),
            "Count" => inner_kids.len() as i64,
        };
        doc.objects.insert(inner, Object::Dictionary(inner_dict));
        root_kids.push(Object::Reference(inner));
    }

    let mut root_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => root_kids,
        "Count" => widths.len() as i64,
    };
    if layout == Layout::InheritedMediaBox {
        root_dict.set("MediaBox", media_box(A4_WIDTH));
    }
    doc.objects.insert(root_id, Object::Dictionary(root_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => root_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize test PDF");
    bytes
}
