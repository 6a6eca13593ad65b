//! The PDF library seam.
//!
//! [`MergeBackend`] takes opened input streams and produces one in-memory
//! document. [`LopdfBackend`] is the implementation used by the binary.

use anyhow::{Context, bail};
use lopdf::{Document, Object, ObjectId};
use std::io::Read;

use crate::io::Source;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against malformed, cyclic `Parent` chains.
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// Combines input PDFs into one document, pages in input order.
pub trait MergeBackend {
    /// Merge every source, in order, into a single document.
    ///
    /// Readers are borrowed; closing them is the caller's business.
    fn merge<R: Read>(&self, sources: &mut [Source<R>]) -> anyhow::Result<Document>;
}

/// Merge backend built on `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl MergeBackend for LopdfBackend {
    fn merge<R: Read>(&self, sources: &mut [Source<R>]) -> anyhow::Result<Document> {
        let total = sources.len();
        let mut documents = Vec::with_capacity(total);

        for (idx, source) in sources.iter_mut().enumerate() {
            let doc = Document::load_from(&mut source.reader)
                .with_context(|| format!("Failed to load PDF: {}", source.path.display()))?;
            log::debug!(
                "[{}/{}] loaded {} ({} pages)",
                idx + 1,
                total,
                source.path.display(),
                doc.get_pages().len()
            );
            documents.push(doc);
        }

        let mut documents = documents.into_iter();
        let Some(mut merged) = documents.next() else {
            bail!("No PDF files to merge");
        };

        // A single document is passed through untouched.
        if total == 1 {
            return Ok(merged);
        }

        let mut max_id = merged.max_id;

        for mut doc in documents {
            // Avoid object id collisions by renumbering the incoming document
            doc.renumber_objects_with(max_id + 1);
            max_id = max_id.max(doc.max_id);

            let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
            flatten_inherited_attributes(&mut doc, &page_ids);

            merged.objects.extend(doc.objects);
            merged.max_id = max_id;

            append_pages_to_page_tree(&mut merged, &page_ids)
                .context("Failed to attach pages to the merged page tree")?;
        }

        merged.renumber_objects();
        merged.compress();

        Ok(merged)
    }
}

/// Copy inherited page attributes onto the pages themselves.
///
/// The pages are about to be re-parented under another page tree and would
/// otherwise lose what their old ancestors provided.
fn flatten_inherited_attributes(doc: &mut Document, page_ids: &[ObjectId]) {
    for &page_id in page_ids {
        let inherited = inherited_attributes(doc, page_id);
        if inherited.is_empty() {
            continue;
        }

        if let Ok(page) = doc.get_object_mut(page_id).and_then(Object::as_dict_mut) {
            for (key, value) in inherited {
                page.set(key, value);
            }
        }
    }
}

/// Attributes the page lacks but one of its ancestors defines, nearest first.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(&'static [u8], Object)> {
    let mut found = Vec::new();
    let Ok(page) = doc.get_dictionary(page_id) else {
        return found;
    };

    let mut missing: Vec<&'static [u8]> = INHERITABLE_ATTRIBUTES
        .into_iter()
        .filter(|key| !page.has(key))
        .collect();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if missing.is_empty() {
            break;
        }
        let Some(node) = parent.and_then(|id| doc.get_dictionary(id).ok()) else {
            break;
        };

        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((*key, value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    found
}

/// Appends the given pages to the merged document's root Pages node.
fn append_pages_to_page_tree(merged: &mut Document, page_ids: &[ObjectId]) -> lopdf::Result<()> {
    let pages_id = merged.catalog()?.get(b"Pages")?.as_reference()?;

    for &page_id in page_ids {
        if let Ok(page) = merged.get_object_mut(page_id).and_then(Object::as_dict_mut) {
            page.set("Parent", Object::Reference(pages_id));
        }
    }

    let pages_dict = merged.get_object_mut(pages_id)?.as_dict_mut()?;

    // Extend Kids[] array with new page references
    let kids = pages_dict.get_mut(b"Kids")?.as_array_mut()?;
    kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

    // Patch Count
    let current_count = pages_dict.get(b"Count")?.as_i64()?;
    pages_dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

    Ok(())
}
