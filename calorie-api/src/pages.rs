//! HTML pages. All text placed in them comes from this crate or from
//! parsed numbers, so nothing needs escaping.

use calorie_model::recommendation::{MediaLink, Recommendation};
use itertools::Itertools;

const INDEX: &str = include_str!("../static/index.html");

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"
    )
}

pub fn index() -> &'static str {
    INDEX
}

pub fn estimate(calories: f64) -> String {
    layout(
        "Calories burned",
        &format!(
            "<h1>Estimated calories burned: {calories:.2}</h1>
<form action=\"/recommendation\" method=\"post\">
<input type=\"hidden\" name=\"calories\" value=\"{calories}\">
<button type=\"submit\">Get diet recommendations</button>
</form>
<p><a href=\"/\">New estimate</a></p>"
        ),
    )
}

fn video(video: &MediaLink) -> String {
    let thumbnail = video
        .thumbnail
        .map(|src| format!("<img src=\"{}\" alt=\"{}\"><br>", src, video.title))
        .unwrap_or_default();
    format!(
        "<li>{}<a href=\"{}\">{}</a></li>",
        thumbnail, video.link, video.title
    )
}

fn article(article: &MediaLink) -> String {
    format!("<li><a href=\"{}\">{}</a></li>", article.link, article.title)
}

pub fn recommendation(recommendation: &Recommendation) -> String {
    layout(
        "Diet recommendations",
        &format!(
            "<h1>Diet recommendations</h1>
<p>{}</p>
<h2>Videos</h2>
<ul>
{}
</ul>
<h2>Articles</h2>
<ul>
{}
</ul>
<p><a href=\"/\">New estimate</a></p>",
            recommendation.advice(),
            recommendation.videos.iter().map(video).join("\n"),
            recommendation.articles.iter().map(article).join("\n"),
        ),
    )
}
