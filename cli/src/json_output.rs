use collabpath_core::{Algorithm, SearchResult};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub algorithm: Algorithm,
}

#[derive(Serialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonArtist>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct JsonArtist {
    pub name: String,
    pub url: String,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_expanded: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn create_json_output(result: &SearchResult) -> JsonOutput {
    let path = result.found.then(|| {
        result
            .path_ids
            .iter()
            .zip(&result.path_names)
            .map(|(id, name)| JsonArtist {
                name: name.clone(),
                url: id.to_string(),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.start_artist.clone(),
            to: result.end_artist.clone(),
            algorithm: result.algorithm,
        },
        result: JsonResult {
            found: result.found,
            degrees: result.degrees,
            path,
            message: result.message.clone(),
        },
        stats: JsonStats {
            search_time_ms: result.duration_ms,
            nodes_expanded: result.nodes_expanded,
            warnings: result.warnings.clone(),
        },
    }
}

pub fn print_json_output(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
