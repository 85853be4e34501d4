//=========================================================================
// Node Serializer
//
// Turns any `serde::Serialize` value into a `Node` tree, so host state
// (config structs, tracker snapshots, JSON values) can be inspected with
// the same operations as script tables.
//
// Mapping:
// ```text
// bool / ints / floats / str / char  → Terminal
// None / () / unit struct            → Absent
// seq / tuple / bytes                → Composite { 1: .., 2: .., ... }
// map                                → Composite { key: .. }   (string/int keys)
// struct                             → Composite { field: .. }
// unit variant                       → Terminal(variant name)
// newtype / tuple / struct variant   → Composite { variant: payload }
// ```
//
// Notes:
// Absent sequence elements leave a hole: their index is consumed but not
// stored, as a script table would behave.
//
//=========================================================================

//=== External Crates =====================================================

use serde::ser::{self, Serialize};

//=== Internal Imports ====================================================

use super::{float_to_index, Key, Node, Scalar, Table};
use crate::core::error::{InspectError, Result};

//=== Public API ==========================================================

/// Serializes `value` into a [`Node`].
///
/// # Errors
///
/// - [`InspectError::IntConversion`] for integers outside the `i64` range
/// - [`InspectError::InvalidKey`] for map keys that are not strings or integers
/// - [`InspectError::Custom`] for errors raised by the value's own impl
pub fn to_node<T>(value: &T) -> Result<Node>
where
    T: ?Sized + Serialize,
{
    value.serialize(NodeSerializer)
}

//=== NodeSerializer ======================================================

/// A serde serializer whose output is a [`Node`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeSerializer;

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = InspectError;

    type SerializeSeq = SerializeTable;
    type SerializeTuple = SerializeTable;
    type SerializeTupleStruct = SerializeTable;
    type SerializeTupleVariant = SerializeTable;
    type SerializeMap = SerializeTable;
    type SerializeStruct = SerializeTable;
    type SerializeStructVariant = SerializeTable;

    //--- Scalars ----------------------------------------------------------

    fn serialize_bool(self, v: bool) -> Result<Node> {
        Ok(v.into())
    }

    fn serialize_i8(self, v: i8) -> Result<Node> {
        Ok(i64::from(v).into())
    }

    fn serialize_i16(self, v: i16) -> Result<Node> {
        Ok(i64::from(v).into())
    }

    fn serialize_i32(self, v: i32) -> Result<Node> {
        Ok(i64::from(v).into())
    }

    fn serialize_i64(self, v: i64) -> Result<Node> {
        Ok(v.into())
    }

    fn serialize_i128(self, v: i128) -> Result<Node> {
        Ok(i64::try_from(v)?.into())
    }

    fn serialize_u8(self, v: u8) -> Result<Node> {
        Ok(i64::from(v).into())
    }

    fn serialize_u16(self, v: u16) -> Result<Node> {
        Ok(i64::from(v).into())
    }

    fn serialize_u32(self, v: u32) -> Result<Node> {
        Ok(i64::from(v).into())
    }

    fn serialize_u64(self, v: u64) -> Result<Node> {
        Ok(i64::try_from(v)?.into())
    }

    fn serialize_u128(self, v: u128) -> Result<Node> {
        Ok(i64::try_from(v)?.into())
    }

    fn serialize_f32(self, v: f32) -> Result<Node> {
        Ok(f64::from(v).into())
    }

    fn serialize_f64(self, v: f64) -> Result<Node> {
        Ok(v.into())
    }

    fn serialize_char(self, v: char) -> Result<Node> {
        Ok(v.to_string().into())
    }

    fn serialize_str(self, v: &str) -> Result<Node> {
        Ok(v.into())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node> {
        Ok(Node::sequence(v.iter().map(|b| i64::from(*b))))
    }

    //--- Absent -----------------------------------------------------------

    fn serialize_none(self) -> Result<Node> {
        Ok(Node::Absent)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Node> {
        Ok(Node::Absent)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node> {
        Ok(Node::Absent)
    }

    //--- Wrappers & Variants ----------------------------------------------

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Node> {
        Ok(variant.into())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        let outer = Table::new();
        outer.set(variant, value.serialize(self)?);
        Ok(outer.into())
    }

    //--- Compounds --------------------------------------------------------

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeTable> {
        Ok(SerializeTable::new(None))
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeTable> {
        Ok(SerializeTable::new(None))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<SerializeTable> {
        Ok(SerializeTable::new(None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTable> {
        Ok(SerializeTable::new(Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeTable> {
        Ok(SerializeTable::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeTable> {
        Ok(SerializeTable::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTable> {
        Ok(SerializeTable::new(Some(variant)))
    }
}

//=== SerializeTable ======================================================

/// In-progress composite for every compound serde shape.
///
/// `variant` wraps the finished table as `{ variant: table }`.
pub struct SerializeTable {
    table: Table,
    next_index: i64,
    pending_key: Option<Key>,
    variant: Option<&'static str>,
}

impl SerializeTable {
    fn new(variant: Option<&'static str>) -> Self {
        Self {
            table: Table::new(),
            next_index: 1,
            pending_key: None,
            variant,
        }
    }

    fn push_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let index = self.next_index;
        self.next_index += 1;
        self.table.set(index, to_node(value)?);
        Ok(())
    }

    fn set_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table.set(key, to_node(value)?);
        Ok(())
    }

    fn finish(self) -> Result<Node> {
        let node = Node::Composite(self.table);
        Ok(match self.variant {
            Some(variant) => {
                let outer = Table::new();
                outer.set(variant, node);
                outer.into()
            }
            None => node,
        })
    }
}

//--- Internal Helpers ----------------------------------------------------

/// Converts a serialized map key into a table key.
fn node_to_key(node: Node) -> Result<Key> {
    match node {
        Node::Terminal(Scalar::Str(name)) => Ok(Key::Name(name)),
        Node::Terminal(Scalar::Int(index)) => Ok(Key::Index(index)),
        Node::Terminal(Scalar::Float(f)) => float_to_index(f)
            .map(Key::Index)
            .ok_or_else(|| InspectError::InvalidKey(Scalar::Float(f).to_string())),
        Node::Terminal(Scalar::Bool(b)) => Err(InspectError::InvalidKey(b.to_string())),
        other => Err(InspectError::InvalidKey(other.type_name().to_owned())),
    }
}

//--- Trait Implementations -----------------------------------------------

impl ser::SerializeSeq for SerializeTable {
    type Ok = Node;
    type Error = InspectError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_element(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeTuple for SerializeTable {
    type Ok = Node;
    type Error = InspectError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_element(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SerializeTable {
    type Ok = Node;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_element(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SerializeTable {
    type Ok = Node;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_element(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeMap for SerializeTable {
    type Ok = Node;
    type Error = InspectError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(node_to_key(to_node(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| InspectError::Custom("map value without a key".into()))?;
        self.table.set(key, to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeStruct for SerializeTable {
    type Ok = Node;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.set_field(key, value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for SerializeTable {
    type Ok = Node;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.set_field(key, value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    //--- Test Helpers -----------------------------------------------------

    fn scalar_at(node: &Node, key: impl Into<Key>) -> Option<Scalar> {
        node.lookup(&key.into()).as_scalar().cloned()
    }

    #[derive(Serialize)]
    struct Snapshot {
        fps: f64,
        keys: Vec<&'static str>,
        label: Option<String>,
    }

    #[derive(Serialize)]
    enum Command {
        Idle,
        Move(i32),
        Resize { w: u32, h: u32 },
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn struct_becomes_named_composite() {
        let node = to_node(&Snapshot {
            fps: 59.5,
            keys: vec!["W", "Space"],
            label: None,
        })
        .unwrap();

        assert_eq!(scalar_at(&node, "fps"), Some(Scalar::Float(59.5)));
        let keys = node.lookup(&Key::from("keys"));
        assert_eq!(scalar_at(&keys, 1), Some(Scalar::from("W")));
        assert_eq!(scalar_at(&keys, 2), Some(Scalar::from("Space")));
        assert!(node.lookup(&Key::from("label")).is_absent());
        assert_eq!(node.as_table().unwrap().len(), 2);
    }

    #[test]
    fn absent_elements_leave_holes() {
        let node = to_node(&vec![Some(1), None, Some(3)]).unwrap();
        let table = node.as_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.border(), 1);
        assert_eq!(scalar_at(&node, 3), Some(Scalar::Int(3)));
    }

    #[test]
    fn enum_variants() {
        assert_eq!(
            to_node(&Command::Idle).unwrap().as_scalar(),
            Some(&Scalar::from("Idle"))
        );

        let moved = to_node(&Command::Move(4)).unwrap();
        assert_eq!(scalar_at(&moved, "Move"), Some(Scalar::Int(4)));

        let resized = to_node(&Command::Resize { w: 800, h: 600 }).unwrap();
        let payload = resized.lookup(&Key::from("Resize"));
        assert_eq!(scalar_at(&payload, "w"), Some(Scalar::Int(800)));
        assert_eq!(scalar_at(&payload, "h"), Some(Scalar::Int(600)));
    }

    #[test]
    fn integer_map_keys_become_indices() {
        let mut map = BTreeMap::new();
        map.insert(2u8, "two");
        map.insert(1u8, "one");
        let node = to_node(&map).unwrap();
        assert_eq!(node.as_table().unwrap().border(), 2);
    }

    #[test]
    fn non_scalar_map_keys_are_rejected() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], "x");
        assert!(matches!(to_node(&map), Err(InspectError::InvalidKey(_))));

        let mut map = BTreeMap::new();
        map.insert(true, "x");
        assert!(matches!(to_node(&map), Err(InspectError::InvalidKey(_))));
    }

    #[test]
    fn out_of_range_integers_fail() {
        assert!(matches!(
            to_node(&u64::MAX),
            Err(InspectError::IntConversion(_))
        ));
        assert!(to_node(&(i64::MAX as u64)).is_ok());
    }

    #[test]
    fn json_values_convert() {
        let value = serde_json::json!({ "x": 1, "nested": { "flag": true }, "list": ["a"] });
        let node = to_node(&value).unwrap();
        assert_eq!(scalar_at(&node, "x"), Some(Scalar::Int(1)));
        let nested = node.lookup(&Key::from("nested"));
        assert_eq!(scalar_at(&nested, "flag"), Some(Scalar::Bool(true)));
        let list = node.lookup(&Key::from("list"));
        assert_eq!(scalar_at(&list, 1), Some(Scalar::from("a")));
    }
}
