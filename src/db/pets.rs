use anyhow::{anyhow, Context, Result};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

use crate::models::{Gender, Pet, PetSummary, PetValues};

/// Catalog projection: id, name and breed in insertion order.
pub fn fetch_pet_summaries(conn: &Connection) -> Result<Vec<PetSummary>> {
    let mut stmt = conn
        .prepare("SELECT _id, name, breed FROM pets ORDER BY _id")
        .context("failed to prepare pet summary query")?;

    let pets = stmt
        .query_map([], |row| {
            Ok(PetSummary {
                id: row.get(0)?,
                name: row.get(1)?,
                breed: row.get(2)?,
            })
        })
        .context("failed to iterate pets")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect pets")?;

    Ok(pets)
}

/// Every column of every pet.
pub fn fetch_pets(conn: &Connection) -> Result<Vec<Pet>> {
    let mut stmt = conn
        .prepare("SELECT _id, name, breed, gender, weight FROM pets ORDER BY _id")
        .context("failed to prepare pets query")?;

    let pets = stmt
        .query_map([], pet_from_row)
        .context("failed to iterate pets")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect pets")?;

    Ok(pets)
}

/// A single pet, or `None` when the id does not exist.
pub fn fetch_pet(conn: &Connection, id: i64) -> Result<Option<Pet>> {
    let mut stmt = conn
        .prepare("SELECT _id, name, breed, gender, weight FROM pets WHERE _id = ?1")
        .context("failed to prepare pet query")?;

    let mut rows = stmt
        .query_map([id], pet_from_row)
        .context("failed to iterate pet")?;

    let pet = rows.next().transpose().context("failed to read pet row")?;
    Ok(pet)
}

/// Insert a validated row and return its new id.
pub fn insert_pet(
    conn: &Connection,
    name: &str,
    breed: &str,
    gender: Gender,
    weight: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO pets (name, breed, gender, weight) VALUES (?1, ?2, ?3, ?4)",
        params![name, breed, gender.code(), weight],
    )
    .context("failed to insert pet")?;

    Ok(conn.last_insert_rowid())
}

/// Update the columns present in `values`, either on one row (`Some(id)`) or
/// on the whole table. Returns the number of rows touched; an empty value set
/// touches nothing.
pub fn update_pets(conn: &Connection, id: Option<i64>, values: &PetValues) -> Result<usize> {
    let mut assignments = Vec::new();
    let mut bound: Vec<Value> = Vec::new();

    if let Some(name) = &values.name {
        bound.push(Value::Text(name.clone()));
        assignments.push(format!("name = ?{}", bound.len()));
    }
    if let Some(breed) = &values.breed {
        bound.push(Value::Text(breed.clone()));
        assignments.push(format!("breed = ?{}", bound.len()));
    }
    if let Some(gender) = values.gender {
        bound.push(Value::Integer(gender.code()));
        assignments.push(format!("gender = ?{}", bound.len()));
    }
    if let Some(weight) = values.weight {
        bound.push(Value::Integer(weight));
        assignments.push(format!("weight = ?{}", bound.len()));
    }

    if assignments.is_empty() {
        return Ok(0);
    }

    let mut sql = format!("UPDATE pets SET {}", assignments.join(", "));
    if let Some(id) = id {
        bound.push(Value::Integer(id));
        sql.push_str(&format!(" WHERE _id = ?{}", bound.len()));
    }

    conn.execute(&sql, params_from_iter(bound))
        .context("failed to update pets")
}

/// Remove one pet. Returns the number of rows deleted (0 or 1).
pub fn delete_pet(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM pets WHERE _id = ?1", params![id])
        .context("failed to delete pet")
}

/// Remove every pet. Returns the number of rows deleted.
pub fn delete_all_pets(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM pets", [])
        .context("failed to delete pets")
}

fn pet_from_row(row: &Row<'_>) -> rusqlite::Result<Pet> {
    let code: i64 = row.get(3)?;
    let gender = Gender::from_code(code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Integer,
            anyhow!("unknown gender code {code}").into(),
        )
    })?;

    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        breed: row.get(2)?,
        gender,
        weight: row.get(4)?,
    })
}
