//! Accepted column-name spellings per role.
//!
//! Lists are ordered: when a table carries columns matching more than one
//! spelling of the same role, the earlier spelling wins. Comparison is
//! lowercased and trimmed, so case variants collapse into one entry.

pub const INVENTORY_NAME: &[&str] = &[
    "name",
    "product",
    "medicine",
    "medicinename",
    "productname",
    "item",
    "description",
];

pub const INVENTORY_CATEGORY: &[&str] = &["category", "type", "group"];

pub const INVENTORY_UNIT_PRICE: &[&str] = &[
    "unitprice",
    "price",
    "unit_price",
    "unit price",
    "sellingprice",
    "selling price",
];

pub const INVENTORY_QUANTITY: &[&str] = &["quantity", "qty", "stock", "amount", "available"];

pub const INVENTORY_UNIT: &[&str] = &["unit", "units", "packsize", "pack size", "pack_size"];

pub const INVENTORY_EXPIRY: &[&str] = &[
    "expirydate",
    "expiry",
    "expiredate",
    "expire",
    "expiration date",
    "expiration",
];

pub const REQUISITION_PHARMACY_NAME: &[&str] = &["pharmacyname", "pharmacy name", "pharmacy"];

pub const REQUISITION_CONTACT: &[&str] = &[
    "contact",
    "phone",
    "pharmacycontact",
    "pharmacy contact",
    "telephone",
    "tel",
];

// Plain "name" sits late so a pharmacy-labelled sheet cannot steal it
// from the item column.
pub const REQUISITION_ITEM_NAME: &[&str] = &[
    "item",
    "itemname",
    "item name",
    "medicine",
    "product",
    "name",
    "description",
];

pub const REQUISITION_QUANTITY: &[&str] = &["quantity", "qty", "amount"];

pub const REQUISITION_UNIT_PRICE: &[&str] = &["unitprice", "unit price", "price"];
