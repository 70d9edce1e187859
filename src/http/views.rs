//! Server-rendered HTML views.
//!
//! Both pages are rendered from the same [`PlanetsResponse`] the JSON API
//! serves: a coordinate table for `/` and a three.js scene for `/3d`. On a
//! failed snapshot they render the error message and no planet content.

use super::dto::PlanetsResponse;

/// Escape text for embedding in HTML element content or attributes.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn error_banner(response: &PlanetsResponse) -> String {
    match &response.error {
        Some(message) => format!(
            r#"<p class="error">{}</p>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn timestamp_line(response: &PlanetsResponse) -> String {
    match &response.current_time {
        Some(time) => format!(
            r#"<p class="timestamp">Computed at {}</p>"#,
            escape_html(time)
        ),
        None => String::new(),
    }
}

/// Render the coordinate table page (`GET /`).
pub fn render_index(response: &PlanetsResponse) -> String {
    let rows: String = response
        .planets
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&p.name),
                escape_html(&p.ra_formatted),
                escape_html(&p.dec_formatted),
                escape_html(&p.distance_formatted),
            )
        })
        .collect();

    let table = if response.planets.is_empty() {
        String::new()
    } else {
        format!(
            "<table>\n<thead><tr><th>Planet</th><th>Right Ascension</th>\
             <th>Declination</th><th>Distance</th></tr></thead>\n\
             <tbody>\n{rows}</tbody>\n</table>"
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Planet Tracker</title>
<style>
body {{ background: #0b0e1a; color: #e8e8f0; font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 52rem; }}
h1 {{ font-weight: 600; }}
a {{ color: #7fb4ff; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ padding: 0.5rem 0.8rem; text-align: left; border-bottom: 1px solid #2a3150; }}
.timestamp {{ color: #9aa3c0; }}
.error {{ color: #ff7a7a; }}
</style>
</head>
<body>
<h1>Planet Tracker</h1>
<p>Current apparent positions as seen from Earth. <a href="/3d">3D view</a> &middot; <a href="/api/planets">JSON</a></p>
{timestamp}
{error}
{table}
</body>
</html>
"#,
        timestamp = timestamp_line(response),
        error = error_banner(response),
        table = table,
    )
}

/// Render the 3D visualization page (`GET /3d`).
///
/// The planet records are embedded as JSON and placed in a three.js scene
/// at their heliocentric coordinates.
pub fn render_solar_system(response: &PlanetsResponse) -> String {
    // `</` must not appear inside the inline <script> payload.
    let planets_json = serde_json::to_string(&response.planets)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Planet Tracker 3D</title>
<style>
body {{ background: #0b0e1a; color: #e8e8f0; font-family: system-ui, sans-serif; margin: 0; }}
#overlay {{ position: absolute; top: 1rem; left: 1rem; }}
#overlay a {{ color: #7fb4ff; }}
.timestamp {{ color: #9aa3c0; }}
.error {{ color: #ff7a7a; }}
</style>
</head>
<body>
<div id="overlay">
<h1>Solar System</h1>
<p><a href="/">Table view</a> &middot; <a href="/api/planets">JSON</a></p>
{timestamp}
{error}
</div>
<script src="https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js"></script>
<script>
const planets = {planets_json};

const scene = new THREE.Scene();
const camera = new THREE.PerspectiveCamera(60, window.innerWidth / window.innerHeight, 0.1, 5000);
const renderer = new THREE.WebGLRenderer({{ antialias: true }});
renderer.setSize(window.innerWidth, window.innerHeight);
document.body.appendChild(renderer.domElement);

// Sun
const sun = new THREE.Mesh(
  new THREE.SphereGeometry(6, 32, 32),
  new THREE.MeshBasicMaterial({{ color: 0xffcc33 }})
);
scene.add(sun);
scene.add(new THREE.PointLight(0xffffff, 1.2, 0));

const colors = {{
  Mercury: 0xb5a7a7, Venus: 0xe8cda2, Mars: 0xd1603d, Jupiter: 0xd8b48a,
  Saturn: 0xe3d9b0, Uranus: 0x9fd6d2, Neptune: 0x5a7bd8
}};

// Square-root distance scale keeps Mercury and Neptune on one screen.
const scale = (au) => Math.sqrt(au) * 40;

for (const p of planets) {{
  const r = Math.sqrt(p.x * p.x + p.y * p.y + p.z * p.z);
  const s = r > 0 ? scale(r) / r : 0;
  const mesh = new THREE.Mesh(
    new THREE.SphereGeometry(2.2, 24, 24),
    new THREE.MeshLambertMaterial({{ color: colors[p.name] || 0xffffff }})
  );
  mesh.position.set(p.x * s, p.z * s, -p.y * s);
  scene.add(mesh);

  const ring = new THREE.Mesh(
    new THREE.RingGeometry(scale(r) - 0.08, scale(r) + 0.08, 128),
    new THREE.MeshBasicMaterial({{ color: 0x2a3150, side: THREE.DoubleSide }})
  );
  ring.rotation.x = Math.PI / 2;
  scene.add(ring);
}}

camera.position.set(0, 160, 260);
camera.lookAt(0, 0, 0);

function animate() {{
  requestAnimationFrame(animate);
  scene.rotation.y += 0.0008;
  renderer.render(scene, camera);
}}
animate();

window.addEventListener('resize', () => {{
  camera.aspect = window.innerWidth / window.innerHeight;
  camera.updateProjectionMatrix();
  renderer.setSize(window.innerWidth, window.innerHeight);
}});
</script>
</body>
</html>
"#,
        timestamp = timestamp_line(response),
        error = error_banner(response),
        planets_json = planets_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::CircularEphemeris;
    use crate::services::compute_snapshot;
    use chrono::TimeZone;

    fn success_response() -> PlanetsResponse {
        let now = chrono::Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap();
        let snapshot = compute_snapshot(&CircularEphemeris::new(), now).unwrap();
        PlanetsResponse::from_snapshot(snapshot)
    }

    #[test]
    fn test_index_renders_all_planet_rows() {
        let html = render_index(&success_response());
        for name in ["Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"] {
            assert!(html.contains(name), "missing row for {name}");
        }
        assert!(html.contains("2024-06-15 18:30:00 UTC"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_index_renders_error_without_rows() {
        let response = PlanetsResponse::failure("Error loading planetary data: <kernel gone>");
        let html = render_index(&response);
        assert!(html.contains("class=\"error\""));
        // Message is escaped, not injected
        assert!(html.contains("&lt;kernel gone&gt;"));
        assert!(!html.contains("<table>"));
        assert!(!html.contains("Mercury"));
    }

    #[test]
    fn test_solar_system_embeds_planet_data() {
        let html = render_solar_system(&success_response());
        assert!(html.contains("\"name\":\"Neptune\""));
        assert!(html.contains("three.min.js"));
    }

    #[test]
    fn test_solar_system_failure_embeds_empty_list() {
        let response = PlanetsResponse::failure("Error loading planetary data: boom");
        let html = render_solar_system(&response);
        assert!(html.contains("const planets = [];"));
        assert!(html.contains("class=\"error\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
