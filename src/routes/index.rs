//! Index page
//!
//! A single static HTML page embedding one upload form per operation. No
//! state, no parameters.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PDF Toolkit</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            background: linear-gradient(45deg, #6a11cb, #2575fc);
            color: white;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .container {
            background-color: rgba(255, 255, 255, 0.1);
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.3);
        }
        h1 {
            text-align: center;
        }
        form {
            margin-bottom: 20px;
        }
        input[type="file"] {
            margin-bottom: 10px;
        }
        button {
            background-color: #2575fc;
            color: white;
            border: none;
            padding: 10px;
            cursor: pointer;
            border-radius: 5px;
        }
        button:hover {
            background-color: #6a11cb;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>PDF Toolkit</h1>

        <h3>Merge PDFs</h3>
        <form action="/merge" method="post" enctype="multipart/form-data">
            <input type="file" name="pdf_files" multiple>
            <button type="submit">Merge PDFs</button>
        </form>

        <h3>Split PDF</h3>
        <form action="/split" method="post" enctype="multipart/form-data">
            <input type="file" name="pdf_file">
            <button type="submit">Split PDF</button>
        </form>

        <h3>PDF to JPG</h3>
        <form action="/pdf_to_jpg" method="post" enctype="multipart/form-data">
            <input type="file" name="pdf_file">
            <button type="submit">Convert to JPG</button>
        </form>

        <h3>JPG to PDF</h3>
        <form action="/jpg_to_pdf" method="post" enctype="multipart/form-data">
            <input type="file" name="jpg_files" multiple>
            <button type="submit">Convert to PDF</button>
        </form>
    </div>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
