//! A `Table` is a record set with named numeric attributes.

use std::cmp::Ordering;

use crate::Precondition;

/// A `Table` is a record set with named numeric attributes and an optional
/// identifier for each record.
///
/// Missing values are stored as `NaN`. The rows are kept in a flat vector and
/// the table tracks how they were re-ordered, so that results computed on a
/// sorted table can be mapped back to the order the records were read in.
#[derive(Debug, Clone)]
pub struct Table {
    /// The name of the table.
    name: String,
    /// The names of the numeric attributes, one per column.
    attributes: Vec<String>,
    /// The records, each with one value per attribute.
    rows: Vec<Vec<f64>>,
    /// The name of the identifier attribute.
    id_attribute: String,
    /// The identifiers of the records, if any.
    ids: Option<Vec<String>>,
    /// `permutation[i]` is the original position of the record now at `i`.
    permutation: Vec<usize>,
}

impl Table {
    /// Creates a new `Table`.
    ///
    /// # Arguments
    ///
    /// * `attributes` - The names of the attributes.
    /// * `rows` - The records. Use `NaN` for a missing value.
    ///
    /// # Errors
    ///
    /// * If two attributes share a name.
    /// * If a row does not have one value per attribute.
    pub fn new(attributes: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, String> {
        for (i, name) in attributes.iter().enumerate() {
            if attributes[..i].contains(name) {
                return Err(format!("Duplicate attribute name `{name}`."));
            }
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != attributes.len()) {
            return Err(format!(
                "Row {i} has {} values but there are {} attributes.",
                row.len(),
                attributes.len()
            ));
        }

        let permutation = (0..rows.len()).collect();
        Ok(Self {
            name: "Unknown Table".to_string(),
            attributes,
            rows,
            id_attribute: "id".to_string(),
            ids: None,
            permutation,
        })
    }

    /// Changes the name of the table.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        name.clone_into(&mut self.name);
        self
    }

    /// The name of the table.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigns identifiers to the records, in the current row order.
    ///
    /// # Errors
    ///
    /// * If the number of identifiers does not match the number of records.
    pub fn with_ids(mut self, id_attribute: &str, ids: Vec<String>) -> Result<Self, String> {
        if ids.len() == self.rows.len() {
            id_attribute.clone_into(&mut self.id_attribute);
            self.ids = Some(ids);
            Ok(self)
        } else {
            Err(format!(
                "The number of ids does not match the number of records. {} vs {}",
                ids.len(),
                self.rows.len()
            ))
        }
    }

    /// The identifiers of the records, if any.
    #[must_use]
    pub fn ids(&self) -> Option<&[String]> {
        self.ids.as_deref()
    }

    /// The name of the identifier attribute.
    #[must_use]
    pub fn id_attribute(&self) -> &str {
        &self.id_attribute
    }

    /// Makes sure every record has an identifier.
    ///
    /// If the table has none, the records are numbered from 1 in their
    /// original order. Returns whether identifiers were created.
    pub fn ensure_ids(&mut self) -> bool {
        if self.ids.is_some() {
            return false;
        }
        let ids = self.permutation.iter().map(|&p| (p + 1).to_string()).collect();
        self.ids = Some(ids);
        ftlog::debug!("Created ids for {} records of {}.", self.rows.len(), self.name);
        true
    }

    /// The names of the attributes.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// The column index of the named attribute.
    #[must_use]
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == name)
    }

    /// The column index of the named attribute.
    ///
    /// # Errors
    ///
    /// * If there is no attribute with that name.
    pub fn require_attribute(&self, name: &str) -> Result<usize, Precondition> {
        self.attribute_index(name)
            .ok_or_else(|| Precondition::UnknownAttribute(name.to_string()))
    }

    /// The values of one attribute for every record.
    ///
    /// # Panics
    ///
    /// * If `attribute` is not a valid column index.
    #[must_use]
    pub fn column(&self, attribute: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[attribute]).collect()
    }

    /// The records.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// `permutation()[i]` is the position, in the original order, of the record
    /// now at `i`.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Fails on the first record with a missing value on any of the given
    /// attributes.
    ///
    /// # Errors
    ///
    /// * `Precondition::MissingValues` naming the first offending record and
    ///   attribute.
    pub fn check_no_missing(&self, attributes: &[usize]) -> Result<(), Precondition> {
        for (record, row) in self.rows.iter().enumerate() {
            if let Some(&a) = attributes.iter().find(|&&a| row[a].is_nan()) {
                return Err(Precondition::MissingValues {
                    record,
                    attribute: self.attributes[a].clone(),
                });
            }
        }
        Ok(())
    }

    /// Stably sorts the records in non-decreasing order of one attribute.
    ///
    /// Records with a missing value on that attribute go last.
    ///
    /// # Errors
    ///
    /// * If there is no attribute with that name.
    pub fn sort_by_attribute(&mut self, name: &str) -> Result<(), String> {
        let a = self
            .attribute_index(name)
            .ok_or_else(|| format!("Cannot sort by unknown attribute `{name}`."))?;

        let mut order = (0..self.rows.len()).collect::<Vec<_>>();
        order.sort_by(|&i, &j| nan_last(self.rows[i][a], self.rows[j][a]));

        self.rows = order.iter().map(|&i| self.rows[i].clone()).collect();
        self.permutation = order.iter().map(|&i| self.permutation[i]).collect();
        if let Some(ids) = self.ids.take() {
            self.ids = Some(order.iter().map(|&i| ids[i].clone()).collect());
        }

        ftlog::debug!("Sorted {} by attribute `{name}`.", self.name);
        Ok(())
    }

    /// Maps one value per record, given in the current row order, back to the
    /// order in which the records were originally read.
    ///
    /// # Errors
    ///
    /// * If the number of values does not match the number of records.
    pub fn restore_order<T: Clone>(&self, values: &[T]) -> Result<Vec<T>, String> {
        if values.len() != self.permutation.len() {
            return Err(format!(
                "Cannot restore the order of {} values for {} records.",
                values.len(),
                self.permutation.len()
            ));
        }
        let mut pairs = self.permutation.iter().zip(values).collect::<Vec<_>>();
        pairs.sort_by_key(|&(&p, _)| p);
        Ok(pairs.into_iter().map(|(_, v)| v.clone()).collect())
    }

    /// Returns a new table with only the records at the given indices, in the
    /// given order.
    ///
    /// # Panics
    ///
    /// * If any index is out of bounds.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
            id_attribute: self.id_attribute.clone(),
            ids: self
                .ids
                .as_ref()
                .map(|ids| indices.iter().map(|&i| ids[i].clone()).collect()),
            permutation: indices.iter().map(|&i| self.permutation[i]).collect(),
        }
    }

    /// Reads a `Table` from a `.csv` file with a header row.
    ///
    /// Empty fields and `?` are read as missing values.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `.csv` file.
    /// * `id_column` - The name of a column holding record identifiers. It is
    ///   not parsed as a number.
    ///
    /// # Errors
    ///
    /// * If the file cannot be read.
    /// * If `id_column` is not one of the headers.
    /// * If a field cannot be parsed as a number.
    pub fn read_csv<P: AsRef<std::path::Path>>(path: P, id_column: Option<&str>) -> Result<Self, String> {
        let name = path
            .as_ref()
            .file_stem()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or("Unknown Table")
            .to_string();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)
            .map_err(|e| e.to_string())?;
        let headers = reader
            .headers()
            .map_err(|e| e.to_string())?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let id_index = match id_column {
            Some(c) => Some(
                headers
                    .iter()
                    .position(|h| h == c)
                    .ok_or_else(|| format!("Id column `{c}` is not in the headers of {name}."))?,
            ),
            None => None,
        };
        let attributes = headers
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != id_index)
            .map(|(_, h)| h.clone())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        let mut ids = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| e.to_string())?;
            let mut row = Vec::with_capacity(attributes.len());
            for (i, field) in record.iter().enumerate() {
                if Some(i) == id_index {
                    ids.push(field.to_string());
                } else {
                    row.push(parse_field(field).ok_or_else(|| {
                        format!("Could not parse `{field}` in column `{}` of record {line}.", headers[i])
                    })?);
                }
            }
            rows.push(row);
        }

        let table = Self::new(attributes, rows)?.with_name(&name);
        match id_column {
            Some(c) => table.with_ids(c, ids),
            None => Ok(table),
        }
    }

    /// Writes the `Table` to a `.csv` file, with extra string columns appended
    /// after the attributes.
    ///
    /// Missing values are written as `?`.
    ///
    /// # Errors
    ///
    /// * If an extra column does not have one value per record.
    /// * If the file cannot be created or written.
    pub fn write_csv<P: AsRef<std::path::Path>>(&self, path: P, extra: &[(&str, &[String])]) -> Result<(), String> {
        if let Some((name, values)) = extra.iter().find(|(_, v)| v.len() != self.rows.len()) {
            return Err(format!(
                "Column `{name}` has {} values for {} records.",
                values.len(),
                self.rows.len()
            ));
        }

        let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;

        let mut header = Vec::with_capacity(self.attributes.len() + extra.len() + 1);
        if self.ids.is_some() {
            header.push(self.id_attribute.as_str());
        }
        header.extend(self.attributes.iter().map(String::as_str));
        header.extend(extra.iter().map(|&(name, _)| name));
        writer.write_record(&header).map_err(|e| e.to_string())?;

        for (i, row) in self.rows.iter().enumerate() {
            let mut record = Vec::with_capacity(header.len());
            if let Some(ids) = &self.ids {
                record.push(ids[i].clone());
            }
            record.extend(row.iter().map(|v| if v.is_nan() { "?".to_string() } else { v.to_string() }));
            record.extend(extra.iter().map(|(_, values)| values[i].clone()));
            writer.write_record(&record).map_err(|e| e.to_string())?;
        }

        writer.flush().map_err(|e| e.to_string())
    }
}

impl AsRef<[Vec<f64>]> for Table {
    fn as_ref(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Orders two values with `NaN` after every number.
fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Parses one csv field, reading empty fields and `?` as missing.
fn parse_field(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() || field == "?" {
        Some(f64::NAN)
    } else {
        field.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Dataset, Precondition};

    use super::Table;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn small() -> Result<Table, String> {
        let rows = vec![vec![3.0, 30.0], vec![1.0, 10.0], vec![2.0, f64::NAN], vec![1.0, 11.0]];
        Table::new(names(&["x", "w"]), rows)
    }

    #[test]
    fn creation() -> Result<(), String> {
        let table = small()?;
        assert_eq!(table.cardinality(), 4);
        assert_eq!(table.attribute_index("w"), Some(1));
        assert_eq!(table.attribute_index("y"), None);
        assert_eq!(table.require_attribute("y"), Err(Precondition::UnknownAttribute("y".to_string())));
        assert_eq!(table.column(0), vec![3.0, 1.0, 2.0, 1.0]);

        assert!(Table::new(names(&["x", "x"]), vec![]).is_err());
        assert!(Table::new(names(&["x", "w"]), vec![vec![1.0]]).is_err());
        Ok(())
    }

    #[test]
    fn ids() -> Result<(), String> {
        let mut table = small()?;
        assert!(table.ids().is_none());
        assert!(table.ensure_ids());
        assert!(!table.ensure_ids());
        assert_eq!(table.ids(), Some(names(&["1", "2", "3", "4"]).as_slice()));

        assert!(small()?.with_ids("key", names(&["a"])).is_err());
        let table = small()?.with_ids("key", names(&["a", "b", "c", "d"]))?;
        assert_eq!(table.id_attribute(), "key");
        Ok(())
    }

    #[test]
    fn missing_values() -> Result<(), String> {
        let table = small()?;
        assert_eq!(table.check_no_missing(&[0]), Ok(()));
        assert_eq!(
            table.check_no_missing(&[0, 1]),
            Err(Precondition::MissingValues {
                record: 2,
                attribute: "w".to_string()
            })
        );
        Ok(())
    }

    #[test]
    fn sort_and_restore() -> Result<(), String> {
        let mut table = small()?;
        table.ensure_ids();

        table.sort_by_attribute("x")?;
        assert_eq!(table.column(0), vec![1.0, 1.0, 2.0, 3.0]);
        assert_eq!(table.permutation(), &[1, 3, 2, 0]);
        assert_eq!(table.ids(), Some(names(&["2", "4", "3", "1"]).as_slice()));

        let restored = table.restore_order(&table.column(1))?;
        assert_eq!(restored[0], 30.0);
        assert_eq!(restored[1], 10.0);
        assert!(restored[2].is_nan());
        assert_eq!(restored[3], 11.0);

        table.sort_by_attribute("w")?;
        assert!(table.column(1)[3].is_nan());
        assert_eq!(table.permutation(), &[1, 3, 0, 2]);

        assert!(table.sort_by_attribute("y").is_err());
        assert!(table.restore_order(&[1, 2]).is_err());
        Ok(())
    }

    #[test]
    fn select() -> Result<(), String> {
        let mut table = small()?;
        table.ensure_ids();
        let subset = table.select(&[3, 0]);
        assert_eq!(subset.cardinality(), 2);
        assert_eq!(subset.column(1), vec![11.0, 30.0]);
        assert_eq!(subset.ids(), Some(names(&["4", "1"]).as_slice()));
        assert_eq!(subset.permutation(), &[3, 0]);
        Ok(())
    }

    #[test]
    fn csv_io() -> Result<(), String> {
        let tmp_dir = tempdir::TempDir::new("table").map_err(|e| e.to_string())?;
        let path = tmp_dir.path().join("points.csv");
        std::fs::write(&path, "key,x,w\na,1.5,2\nb,?,3\nc,2.5,\n").map_err(|e| e.to_string())?;

        let table = Table::read_csv(&path, Some("key"))?;
        assert_eq!(table.name(), "points");
        assert_eq!(table.attributes(), names(&["x", "w"]).as_slice());
        assert_eq!(table.ids(), Some(names(&["a", "b", "c"]).as_slice()));
        assert!(table.rows()[1][0].is_nan());
        assert!(table.rows()[2][1].is_nan());
        assert_eq!(table.rows()[0], vec![1.5, 2.0]);

        assert!(Table::read_csv(&path, Some("nope")).is_err());

        let labels = names(&["cluster_1", "cluster_0", "cluster_1"]);
        let out_path = tmp_dir.path().join("labelled.csv");
        table.write_csv(&out_path, &[("cluster", labels.as_slice())])?;
        let written = std::fs::read_to_string(&out_path).map_err(|e| e.to_string())?;
        assert_eq!(written, "key,x,w,cluster\na,1.5,2,cluster_1\nb,?,3,cluster_0\nc,2.5,?,cluster_1\n");

        assert!(table.write_csv(&out_path, &[("cluster", &labels[..1])]).is_err());
        Ok(())
    }
}
