use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single job posting. Immutable once created; there is no update operation.
///
/// Wire names follow the browser clients: `type`, `applyLink`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    #[serde(rename = "applyLink")]
    pub apply_link: String,
    #[serde(rename = "createdAt", with = "wire_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Fields a client may supply when creating a job. All optional; text is
/// stored verbatim (escaping is the rendering client's concern).
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default = "default_job_type")]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "applyLink", default)]
    pub apply_link: String,
}

fn default_job_type() -> String {
    "Full-time".to_string()
}

// An absent type means "Full-time" whether the job comes off the wire or is
// built in code.
impl Default for NewJob {
    fn default() -> Self {
        NewJob {
            title: String::new(),
            location: String::new(),
            job_type: default_job_type(),
            description: String::new(),
            apply_link: String::new(),
        }
    }
}

/// `createdAt` is persisted and served as `YYYY-MM-DD HH:MM:SS` (UTC),
/// the format the existing jobs documents already use.
mod wire_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(de)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_job_wire_names() {
        let job = Job {
            id: "abc".to_string(),
            title: "Engineer".to_string(),
            location: "Remote".to_string(),
            job_type: "Full-time".to_string(),
            description: String::new(),
            apply_link: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert_eq!(value["applyLink"], "");
        assert_eq!(value["createdAt"], "2024-03-01 09:30:00");
    }

    #[test]
    fn test_job_timestamp_round_trip() {
        let job = Job {
            id: "abc".to_string(),
            title: String::new(),
            location: String::new(),
            job_type: "Contract".to_string(),
            description: String::new(),
            apply_link: String::new(),
            created_at: Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(),
        };
        let json = serde_json::to_string(&job).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn test_new_job_defaults() {
        let new: NewJob = serde_json::from_str("{}").unwrap();
        assert_eq!(new.title, "");
        assert_eq!(new.location, "");
        assert_eq!(new.job_type, "Full-time");
        assert_eq!(new.description, "");
        assert_eq!(new.apply_link, "");
    }

    #[test]
    fn test_new_job_explicit_fields_win() {
        let new: NewJob =
            serde_json::from_str(r#"{"title":"Designer","type":"Part-time"}"#).unwrap();
        assert_eq!(new.title, "Designer");
        assert_eq!(new.job_type, "Part-time");
        assert_eq!(new.location, "");
    }
}
