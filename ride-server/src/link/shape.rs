//! Origin/destination extraction from Google Maps URL shapes.
//!
//! Google Maps shares directions in several forms:
//! - `/maps/dir/<origin>/<destination>/@<viewport>` (path)
//! - `?saddr=<origin>&daddr=<destination>` or `?origin=..&destination=..` (query)
//! - `#...<lat>,<lng>...<lat>,<lng>` (fragment coordinates)
//! - `?data=<encoded blob with lat,lng pairs>` (embedded data)
//!
//! Shapes are tried in that order and the first one that yields both ends
//! wins. Nothing here touches the network.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// A `lat,lng` pair, not preceded by another digit or decimal point.
static COORDINATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.-])(-?\d{1,3}\.\d+),(-?\d{1,3}\.\d+)")
        .expect("coordinate pattern is valid")
});

/// Which URL shape produced a pair of route ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkShape {
    /// `/dir/<origin>/<destination>` path segments.
    DirPath,
    /// `saddr`/`daddr` or `origin`/`destination` query parameters.
    AddressQuery,
    /// Coordinate pairs in the URL fragment.
    FragmentCoordinates,
    /// Coordinate pairs inside the `data` query parameter.
    DataParameter,
}

impl LinkShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkShape::DirPath => "dir-path",
            LinkShape::AddressQuery => "address-query",
            LinkShape::FragmentCoordinates => "fragment-coordinates",
            LinkShape::DataParameter => "data-parameter",
        }
    }
}

impl fmt::Display for LinkShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin and destination tokens read from a link.
///
/// Tokens are either place text ("Times Square") or `"lat,lng"` strings,
/// both of which the directions provider accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEnds {
    pub origin: String,
    pub destination: String,
    pub shape: LinkShape,
}

impl RouteEnds {
    fn new(origin: String, destination: String, shape: LinkShape) -> Self {
        Self {
            origin,
            destination,
            shape,
        }
    }
}

/// Extract route ends from an already-expanded URL.
///
/// Returns `None` when no shape applies.
pub fn extract_route_ends(url: &Url) -> Option<RouteEnds> {
    from_dir_path(url)
        .or_else(|| from_address_query(url))
        .or_else(|| from_fragment(url))
        .or_else(|| from_data_parameter(url))
}

fn from_dir_path(url: &Url) -> Option<RouteEnds> {
    let segments: Vec<&str> = url.path_segments()?.collect();
    let dir = segments.iter().position(|s| *s == "dir")?;

    let origin = place_token(segments.get(dir + 1)?)?;
    let destination = place_token(segments.get(dir + 2)?)?;
    Some(RouteEnds::new(origin, destination, LinkShape::DirPath))
}

/// Decode a path segment into a place token.
///
/// Viewport (`@...`) and `data=` segments, and empty ones, are not places.
fn place_token(segment: &str) -> Option<String> {
    if segment.starts_with('@') || segment.starts_with("data=") {
        return None;
    }
    let decoded = decode_component(segment);
    let token = decoded.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// `+` is a space in shared links; everything else is percent-encoded.
fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

fn from_address_query(url: &Url) -> Option<RouteEnds> {
    const PAIRS: [(&str, &str); 2] = [("saddr", "daddr"), ("origin", "destination")];

    PAIRS.iter().find_map(|(from, to)| {
        let origin = query_value(url, from)?;
        let destination = query_value(url, to)?;
        Some(RouteEnds::new(origin, destination, LinkShape::AddressQuery))
    })
}

/// First non-blank value of a query parameter, decoded.
fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn from_fragment(url: &Url) -> Option<RouteEnds> {
    let fragment = decode_component(url.fragment()?);
    let (origin, destination) = first_two_coordinates(&fragment)?;
    Some(RouteEnds::new(
        origin,
        destination,
        LinkShape::FragmentCoordinates,
    ))
}

fn from_data_parameter(url: &Url) -> Option<RouteEnds> {
    let data = url
        .query_pairs()
        .find(|(k, _)| k == "data")
        .map(|(_, v)| v.into_owned())?;
    // The blob is often encoded a second time
    let decoded = String::from_utf8_lossy(&urlencoding::decode_binary(data.as_bytes())).into_owned();
    let (origin, destination) = first_two_coordinates(&decoded)?;
    Some(RouteEnds::new(origin, destination, LinkShape::DataParameter))
}

/// The first two valid `lat,lng` pairs in `text`, verbatim.
///
/// Pairs outside the valid latitude/longitude range are skipped.
fn first_two_coordinates(text: &str) -> Option<(String, String)> {
    let mut pairs = COORDINATE_PAIR.captures_iter(text).filter_map(|caps| {
        let lat = caps.get(1)?.as_str();
        let lng = caps.get(2)?.as_str();
        is_valid_coordinate(lat, lng).then(|| format!("{lat},{lng}"))
    });
    let origin = pairs.next()?;
    let destination = pairs.next()?;
    Some((origin, destination))
}

fn is_valid_coordinate(lat: &str, lng: &str) -> bool {
    match (lat.parse::<f64>(), lng.parse::<f64>()) {
        (Ok(lat), Ok(lng)) => (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(url: &str) -> Option<RouteEnds> {
        extract_route_ends(&Url::parse(url).unwrap())
    }

    fn pair(url: &str) -> (String, String, LinkShape) {
        let e = ends(url).unwrap();
        (e.origin, e.destination, e.shape)
    }

    #[test]
    fn dir_path() {
        let (o, d, shape) = pair("https://www.google.com/maps/dir/Times+Square/Union+Square/");
        assert_eq!(o, "Times Square");
        assert_eq!(d, "Union Square");
        assert_eq!(shape, LinkShape::DirPath);
    }

    #[test]
    fn dir_path_percent_decoding() {
        let (o, d, _) = pair(
            "https://www.google.com/maps/dir/Empire+State+Building,+20+W+34th+St,+New+York,+NY+10001/Grand%20Central%20Terminal/@40.75,-73.98,14z/data=!4m2!4m1!3e3",
        );
        assert_eq!(o, "Empire State Building, 20 W 34th St, New York, NY 10001");
        assert_eq!(d, "Grand Central Terminal");
    }

    #[test]
    fn dir_path_with_only_origin_falls_through() {
        // Destination slot holds the viewport, and no other shape applies
        let url = "https://www.google.com/maps/dir/Empire+State+Building/@40.7484405,-73.9856644,17z";
        assert!(ends(url).is_none());
    }

    #[test]
    fn dir_path_empty_origin_falls_through() {
        let url = "https://www.google.com/maps/dir//Union+Square/";
        assert!(ends(url).is_none());
    }

    #[test]
    fn saddr_daddr_verbatim() {
        let (o, d, shape) = pair("https://maps.google.com/maps?saddr=40.75,-73.98&daddr=40.73,-73.99");
        assert_eq!(o, "40.75,-73.98");
        assert_eq!(d, "40.73,-73.99");
        assert_eq!(shape, LinkShape::AddressQuery);
    }

    #[test]
    fn origin_destination_params() {
        let (o, d, shape) = pair(
            "https://www.google.com/maps/dir/?api=1&origin=Canal+St&destination=Bedford%20Av&travelmode=transit",
        );
        assert_eq!(o, "Canal St");
        assert_eq!(d, "Bedford Av");
        assert_eq!(shape, LinkShape::AddressQuery);
    }

    #[test]
    fn query_requires_both_ends() {
        assert!(ends("https://maps.google.com/maps?saddr=Canal+St").is_none());
        assert!(ends("https://maps.google.com/maps?saddr=&daddr=Canal+St").is_none());
    }

    #[test]
    fn path_wins_over_query() {
        let (o, _, shape) = pair("https://www.google.com/maps/dir/A+Place/B+Place/?saddr=X&daddr=Y");
        assert_eq!(o, "A Place");
        assert_eq!(shape, LinkShape::DirPath);
    }

    #[test]
    fn fragment_coordinates() {
        let (o, d, shape) = pair("https://www.google.com/maps#route=40.7359,-73.9911;40.7527,-73.9772");
        assert_eq!(o, "40.7359,-73.9911");
        assert_eq!(d, "40.7527,-73.9772");
        assert_eq!(shape, LinkShape::FragmentCoordinates);
    }

    #[test]
    fn fragment_needs_two_pairs() {
        assert!(ends("https://www.google.com/maps#40.7359,-73.9911").is_none());
    }

    #[test]
    fn out_of_range_pairs_are_skipped() {
        let (o, d, _) = pair("https://www.google.com/maps#123.4,-73.9;40.7359,-73.9911;40.7527,-73.9772");
        assert_eq!(o, "40.7359,-73.9911");
        assert_eq!(d, "40.7527,-73.9772");
    }

    #[test]
    fn data_parameter_coordinates() {
        let (o, d, shape) = pair(
            "https://www.google.com/maps?data=%2521from%253D40.7359%2C-73.9911%2521to%253D40.7527%2C-73.9772",
        );
        assert_eq!(o, "40.7359,-73.9911");
        assert_eq!(d, "40.7527,-73.9772");
        assert_eq!(shape, LinkShape::DataParameter);
    }

    #[test]
    fn nothing_found() {
        assert!(ends("https://www.google.com/maps/place/Canal+St").is_none());
        assert!(ends("https://www.google.com/maps/@40.75,-73.98,15z").is_none());
    }

    #[test]
    fn shape_names() {
        assert_eq!(LinkShape::DirPath.to_string(), "dir-path");
        assert_eq!(LinkShape::DataParameter.as_str(), "data-parameter");
    }
}
