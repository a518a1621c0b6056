#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, Stream};

/// Build a PDF whose pages draw their one-based page number
pub fn create_test_pdf(num_pages: usize) -> Document {
    create_test_pdf_with_sizes(&vec![(612.0, 792.0); num_pages])
}

/// Build a PDF with one page per (width, height) entry
pub fn create_test_pdf_with_sizes(sizes: &[(f32, f32)]) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    let font_id = doc.add_object(font_dict);

    let mut kids = Vec::new();
    for (index, &(width, height)) in sizes.iter().enumerate() {
        let content = format!("BT /F1 48 Tf 100 100 Td ({}) Tj ET", index + 1);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut font_resources = Dictionary::new();
        font_resources.set("F1", Object::Reference(font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(font_resources));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width),
                    Object::Real(height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    // Create pages dict
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(sizes.len() as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

/// Serialize a document to bytes
pub fn to_bytes(mut doc: Document) -> Vec<u8> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

/// Read (width, height) from an output page's MediaBox
pub fn media_box_size(doc: &Document, page_id: lopdf::ObjectId) -> (f32, f32) {
    let dict = doc.get_dictionary(page_id).unwrap();
    let values = dict.get(b"MediaBox").unwrap().as_array().unwrap();
    let number = |obj: &Object| match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        other => panic!("unexpected MediaBox entry {:?}", other),
    };
    (number(&values[2]), number(&values[3]))
}

/// Set an entry on the page dictionary of page `index` (zero-based)
pub fn set_page_entry(doc: &mut Document, index: usize, key: &str, value: Object) {
    let page_id = doc.get_pages()[&(index as u32 + 1)];
    doc.get_dictionary_mut(page_id).unwrap().set(key, value);
}

/// Set an entry on the root of the page tree, inherited by every page
pub fn set_pages_entry(doc: &mut Document, key: &str, value: Object) {
    let pages_id = doc
        .catalog()
        .unwrap()
        .get(b"Pages")
        .unwrap()
        .as_reference()
        .unwrap();
    doc.get_dictionary_mut(pages_id).unwrap().set(key, value);
}

/// A four-number PDF rectangle
pub fn pdf_box(x0: i64, y0: i64, x1: i64, y1: i64) -> Object {
    Object::Array(vec![
        Object::Integer(x0),
        Object::Integer(y0),
        Object::Integer(x1),
        Object::Integer(y1),
    ])
}
