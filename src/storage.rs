use crate::models::FlatUser;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save users as CSV with header row and no index column.
pub fn save_csv<P: AsRef<Path>>(users: &[FlatUser], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(FlatUser::FIELD_NAMES)?;
    for u in users {
        wtr.serialize((
            &u.first_name,
            &u.last_name,
            &u.full_name,
            &u.email,
            u.age,
            &u.gender,
            &u.country,
            &u.city,
            &u.street,
            &u.phone,
            &u.profile_picture,
            &u.nationality,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save users as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(users: &[FlatUser], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(users)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlatUser;
    use tempfile::tempdir;

    fn sample_user() -> FlatUser {
        FlatUser {
            first_name: "Jennie".into(),
            last_name: "Nichols".into(),
            full_name: "Jennie Nichols".into(),
            email: "jennie.nichols@example.com".into(),
            age: 30,
            gender: "female".into(),
            country: "United States".into(),
            city: "Billings".into(),
            street: "8929 Valwood Pkwy".into(),
            phone: "(272) 790-0888".into(),
            profile_picture: "https://randomuser.me/api/portraits/women/75.jpg".into(),
            nationality: "US".into(),
        }
    }

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let users = vec![sample_user()];
        save_csv(&users, &csvp).unwrap();
        save_json(&users, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }
}
