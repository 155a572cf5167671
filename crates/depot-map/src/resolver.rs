//! Resolution of semantic roles to source columns.
//!
//! Each role resolves once per import into a [`ColumnRef`], which is then
//! applied uniformly to every row. Synonym lists are consulted in order;
//! a role with no matching column falls back to a fixed position, unless
//! that position already belongs to a synonym-resolved role (in which
//! case the role reads as absent and field defaults apply).

use std::collections::BTreeSet;

use crate::synonyms;

/// Where a role reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef {
    /// A column key matched one of the role's synonyms.
    Matched(usize),
    /// No synonym matched; the fixed fallback position is assumed. This
    /// can silently misattribute columns when a headerless file does not
    /// follow the assumed layout; known limitation.
    Positional(usize),
    /// No synonym matched and the fallback position is occupied by a
    /// synonym-resolved role; the role has no source column.
    Absent,
}

impl ColumnRef {
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Matched(index) | Self::Positional(index) => Some(index),
            Self::Absent => None,
        }
    }

    pub fn is_matched(self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Finds the column matching a role's synonym list.
///
/// Synonym order encodes preference: the first synonym with any matching
/// key wins regardless of where that key sits in the table. Ties on the
/// same synonym go to the leftmost column.
pub fn match_synonym(columns: &[String], synonyms: &[&str]) -> Option<usize> {
    for synonym in synonyms {
        for (index, key) in columns.iter().enumerate() {
            if normalize_key(key) == *synonym {
                return Some(index);
            }
        }
    }
    None
}

fn resolve_role(
    columns: &[String],
    synonyms: &[&str],
    fallback: usize,
    claimed: &BTreeSet<usize>,
) -> ColumnRef {
    match match_synonym(columns, synonyms) {
        Some(index) => ColumnRef::Matched(index),
        None if claimed.contains(&fallback) => ColumnRef::Absent,
        None => ColumnRef::Positional(fallback),
    }
}

fn claimed_indices(columns: &[String], role_synonyms: &[&[&str]]) -> BTreeSet<usize> {
    role_synonyms
        .iter()
        .filter_map(|synonyms| match_synonym(columns, synonyms))
        .collect()
}

/// Column plan for inventory imports, resolved once per table.
///
/// Positional convention for unlabelled files:
/// 0=name, 1=category, 2=price, 3=quantity, 4=unit, 5=expiry.
#[derive(Debug, Clone, Copy)]
pub struct InventoryColumns {
    pub name: ColumnRef,
    pub category: ColumnRef,
    pub unit_price: ColumnRef,
    pub quantity: ColumnRef,
    pub unit: ColumnRef,
    pub expiry_date: ColumnRef,
}

impl InventoryColumns {
    pub fn resolve(columns: &[String]) -> Self {
        let claimed = claimed_indices(
            columns,
            &[
                synonyms::INVENTORY_NAME,
                synonyms::INVENTORY_CATEGORY,
                synonyms::INVENTORY_UNIT_PRICE,
                synonyms::INVENTORY_QUANTITY,
                synonyms::INVENTORY_UNIT,
                synonyms::INVENTORY_EXPIRY,
            ],
        );
        Self {
            name: resolve_role(columns, synonyms::INVENTORY_NAME, 0, &claimed),
            category: resolve_role(columns, synonyms::INVENTORY_CATEGORY, 1, &claimed),
            unit_price: resolve_role(columns, synonyms::INVENTORY_UNIT_PRICE, 2, &claimed),
            quantity: resolve_role(columns, synonyms::INVENTORY_QUANTITY, 3, &claimed),
            unit: resolve_role(columns, synonyms::INVENTORY_UNIT, 4, &claimed),
            expiry_date: resolve_role(columns, synonyms::INVENTORY_EXPIRY, 5, &claimed),
        }
    }
}

/// Column plan for requisition imports: pharmacy metadata plus line
/// items.
///
/// Positional convention: pharmacy metadata at 0-1, items at 0..2. The
/// pharmacy and item roles deliberately share positions in headerless
/// files.
#[derive(Debug, Clone, Copy)]
pub struct RequisitionColumns {
    pub pharmacy_name: ColumnRef,
    pub pharmacy_contact: ColumnRef,
    pub item_name: ColumnRef,
    pub quantity: ColumnRef,
    pub unit_price: ColumnRef,
}

impl RequisitionColumns {
    pub fn resolve(columns: &[String]) -> Self {
        let claimed = claimed_indices(
            columns,
            &[
                synonyms::REQUISITION_PHARMACY_NAME,
                synonyms::REQUISITION_CONTACT,
                synonyms::REQUISITION_ITEM_NAME,
                synonyms::REQUISITION_QUANTITY,
                synonyms::REQUISITION_UNIT_PRICE,
            ],
        );
        Self {
            pharmacy_name: resolve_role(columns, synonyms::REQUISITION_PHARMACY_NAME, 0, &claimed),
            pharmacy_contact: resolve_role(columns, synonyms::REQUISITION_CONTACT, 1, &claimed),
            item_name: resolve_role(columns, synonyms::REQUISITION_ITEM_NAME, 0, &claimed),
            quantity: resolve_role(columns, synonyms::REQUISITION_QUANTITY, 1, &claimed),
            unit_price: resolve_role(columns, synonyms::REQUISITION_UNIT_PRICE, 2, &claimed),
        }
    }
}
