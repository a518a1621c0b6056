//! XObject creation for imposition
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then placed onto output sheets with transformations.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an XObject from a source page.
///
/// The XObject can then be placed multiple times on output pages
/// with different transformations. Referenced objects are copied through
/// `cache` so shared resources land in the output only once.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Source object ID to output object ID mapping
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let [x0, y0, x1, y1] = page_box(source, page_id)?;

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(vec![
            Object::Real(x0),
            Object::Real(y0),
            Object::Real(x1),
            Object::Real(y1),
        ]),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => get_single_content_stream(doc, *id),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            result.extend_from_slice(&get_single_content_stream(doc, *id)?);
            result.push(b'\n');
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let referenced = source.get_object(*id)?;

            // Reserve the ID first so reference cycles resolve to it
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            match copy_object_deep(output, source, referenced, cache) {
                Ok(copied) => {
                    output.objects.insert(new_id, copied);
                    Ok(Object::Reference(new_id))
                }
                Err(err) => {
                    cache.remove(id);
                    Err(err)
                }
            }
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let new_dict = copy_dictionary(output, source, &stream.dict, cache)?;
            let mut copied = Stream::new(new_dict, stream.content.clone());
            copied.allows_compression = stream.allows_compression;
            Ok(Object::Stream(copied))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Boxes
// =============================================================================

/// Page attributes that may be inherited from the page tree stop being
/// looked up after this many levels.
const MAX_TREE_DEPTH: usize = 32;

/// Look up a page attribute, walking up the page tree for inheritable keys.
fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<Object>> {
    let mut node_id = page_id;

    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(node_id)?;
        if let Ok(value) = node.get(key) {
            let value = match value {
                Object::Reference(id) => doc.get_object(*id)?.clone(),
                other => other.clone(),
            };
            return Ok(Some(value));
        }

        match node.get(b"Parent").and_then(|parent| parent.as_reference()) {
            Ok(parent_id) => node_id = parent_id,
            Err(_) => break,
        }
    }

    Ok(None)
}

/// Visible area of a source page and how a viewer turns it for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    /// Visible box `[x0, y0, x1, y1]` in page space: the CropBox clipped to
    /// the MediaBox
    pub bbox: [f32; 4],
    /// Clockwise display rotation in degrees: 0, 90, 180 or 270
    pub rotation: u16,
}

impl PageFrame {
    /// Unrotated (width, height) of the visible box
    pub fn box_size(&self) -> (f32, f32) {
        let [x0, y0, x1, y1] = self.bbox;
        (x1 - x0, y1 - y0)
    }

    /// (width, height) as displayed, with the rotation applied
    pub fn display_size(&self) -> (f32, f32) {
        let (width, height) = self.box_size();
        match self.rotation {
            90 | 270 => (height, width),
            _ => (width, height),
        }
    }
}

/// Resolve the visible box and display rotation of a page.
pub fn page_frame(doc: &Document, page_id: ObjectId) -> Result<PageFrame> {
    Ok(PageFrame {
        bbox: page_box(doc, page_id)?,
        rotation: page_rotation(doc, page_id)?,
    })
}

/// Get the visible box `[x0, y0, x1, y1]` of a page.
///
/// This is the CropBox intersected with the MediaBox, both inheritable.
/// Pages without a usable MediaBox fall back to US Letter at the origin; a
/// CropBox that misses the MediaBox entirely is ignored.
pub fn page_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4]> {
    let media = read_box(doc, page_id, b"MediaBox")?.unwrap_or([
        0.0,
        0.0,
        DEFAULT_PAGE_DIMENSIONS.0,
        DEFAULT_PAGE_DIMENSIONS.1,
    ]);

    let Some(crop) = read_box(doc, page_id, b"CropBox")? else {
        return Ok(media);
    };

    let visible = [
        crop[0].max(media[0]),
        crop[1].max(media[1]),
        crop[2].min(media[2]),
        crop[3].min(media[3]),
    ];
    if visible[2] > visible[0] && visible[3] > visible[1] {
        Ok(visible)
    } else {
        log::warn!("Ignoring CropBox {:?} outside MediaBox {:?}", crop, media);
        Ok(media)
    }
}

/// Get source page dimensions (width, height) in points, as displayed
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    Ok(page_frame(doc, page_id)?.display_size())
}

/// Read an inheritable box attribute, normalized so that `x0 <= x1` and
/// `y0 <= y1`.
fn read_box(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<[f32; 4]>> {
    let Some(Object::Array(values)) = inherited_attribute(doc, page_id, key)? else {
        return Ok(None);
    };

    let numbers: Vec<f32> = values.iter().filter_map(extract_number).collect();
    let &[ax, ay, bx, by] = numbers.as_slice() else {
        return Ok(None);
    };

    Ok(Some([ax.min(bx), ay.min(by), ax.max(bx), ay.max(by)]))
}

/// Read the inheritable `/Rotate` entry, reduced to 0, 90, 180 or 270.
fn page_rotation(doc: &Document, page_id: ObjectId) -> Result<u16> {
    let degrees = match inherited_attribute(doc, page_id, b"Rotate")? {
        Some(Object::Integer(degrees)) => degrees,
        Some(Object::Real(degrees)) => degrees.round() as i64,
        _ => return Ok(0),
    };

    match degrees.rem_euclid(360) {
        0 => Ok(0),
        90 => Ok(90),
        180 => Ok(180),
        270 => Ok(270),
        other => {
            log::warn!("Ignoring /Rotate {} (not a multiple of 90)", other);
            Ok(0)
        }
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
