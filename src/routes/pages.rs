//! Marketing pages
//!
//! Fixed HTML with no server-side data. The upload and verify pages carry
//! small scripts that talk to the JSON API.

use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/upload", get(upload))
        .route("/verify", get(verify))
        .route("/terms", get(terms))
        .route("/privacy", get(privacy))
}

const STYLE: &str = r#"
    body { font-family: Georgia, serif; margin: 0; color: #1d1d1f; background: #faf8f3; }
    header { background: #14213d; color: #fff; padding: 1rem 2rem; }
    header a { color: #fca311; margin-right: 1rem; text-decoration: none; }
    main { max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
    .card { border: 1px solid #ddd; background: #fff; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    input { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    button, .button { display: inline-block; margin-top: 1rem; padding: 0.6rem 1rem; }
    .status { margin-top: 0.75rem; font-family: monospace; white-space: pre-wrap; }
    footer { text-align: center; color: #777; font-size: 0.85rem; margin: 3rem 0 1rem; }
"#;

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title} - Authenticon</title>
  <style>{STYLE}</style>
</head>
<body>
  <header>
    <strong>Authenticon</strong>
    <nav>
      <a href="/">Home</a>
      <a href="/upload">Submit an item</a>
      <a href="/verify">Verify a certificate</a>
    </nav>
  </header>
  <main>
{body}
  </main>
  <footer>
    <a href="/terms">Terms</a> &middot; <a href="/privacy">Privacy</a>
  </footer>
</body>
</html>"#
    ))
}

async fn home() -> Html<String> {
    layout(
        "Autograph Verification",
        r#"    <h1>Know your autograph is real</h1>
    <p>Authenticon examines signed memorabilia and issues a certificate with a
    unique verification code for every item we authenticate.</p>
    <div class="card">
      <h2>How it works</h2>
      <ol>
        <li>Upload clear photos of the signature and the item.</li>
        <li>Our examiners compare the signature against known exemplars.</li>
        <li>You receive a report and a certificate code anyone can check.</li>
      </ol>
      <a class="button" href="/upload">Submit an item</a>
    </div>
    <div class="card">
      <h2>See a sample</h2>
      <p>Curious what a report looks like? Download our sample certificate report.</p>
      <a class="button" href="/api/report">Download sample report (PDF)</a>
    </div>"#,
    )
}

async fn upload() -> Html<String> {
    layout(
        "Submit an item",
        r#"    <h1>Submit an item</h1>
    <div class="card">
      <p>Select a photo or scan. Files go straight to secure storage.</p>
      <input id="fileInput" type="file" />
      <button id="uploadBtn">Upload</button>
      <div id="uploadStatus" class="status"></div>
    </div>
    <script>
      const statusEl = document.getElementById('uploadStatus');
      document.getElementById('uploadBtn').addEventListener('click', async () => {
        const input = document.getElementById('fileInput');
        if (!input.files.length) {
          statusEl.textContent = 'Select a file first.';
          return;
        }
        const file = input.files[0];
        try {
          statusEl.textContent = 'Requesting upload URL...';
          const res = await fetch('/api/upload', { method: 'POST' });
          if (!res.ok) throw new Error('Could not get an upload URL (' + res.status + ')');
          const { uploadUrl, key } = await res.json();

          statusEl.textContent = 'Uploading...';
          const put = await fetch(uploadUrl, {
            method: 'PUT',
            headers: { 'Content-Type': file.type || 'application/octet-stream' },
            body: file
          });
          if (!put.ok) throw new Error('Storage rejected the upload (' + put.status + ')');
          statusEl.textContent = 'Uploaded. Reference: ' + key;
        } catch (err) {
          statusEl.textContent = 'Upload failed: ' + err.message;
        }
      });
    </script>"#,
    )
}

async fn verify() -> Html<String> {
    layout(
        "Verify a certificate",
        r#"    <h1>Verify a certificate</h1>
    <div class="card">
      <label for="codeInput">Certificate code</label>
      <input id="codeInput" placeholder="e.g. VALID123" />
      <button id="verifyBtn">Verify</button>
      <div id="verifyStatus" class="status"></div>
    </div>
    <script>
      const statusEl = document.getElementById('verifyStatus');
      document.getElementById('verifyBtn').addEventListener('click', async () => {
        const code = document.getElementById('codeInput').value;
        try {
          const res = await fetch('/api/verify?code=' + encodeURIComponent(code));
          const result = await res.json();
          if (result.valid) {
            let text = 'Valid certificate, issued ' + result.issuedAt + '.';
            if (result.details) {
              text += '\n' + result.details.celebrity + ' (' + result.details.role + '): '
                + result.details.itemDescription;
            }
            statusEl.textContent = text;
          } else {
            statusEl.textContent = 'No certificate was issued with this code.';
          }
        } catch (err) {
          statusEl.textContent = 'Lookup failed: ' + err.message;
        }
      });
    </script>"#,
    )
}

async fn terms() -> Html<String> {
    layout(
        "Terms of Service",
        r#"    <h1>Terms of Service</h1>
    <p>Authenticon provides opinions on the authenticity of signatures based on
    visual examination. An opinion is not a guarantee and does not transfer
    title to any item.</p>
    <p>By submitting images you confirm you have the right to share them and
    allow us to store them for the purpose of examination.</p>
    <p>Certificates remain valid only for the item described in the report.</p>"#,
    )
}

async fn privacy() -> Html<String> {
    layout(
        "Privacy Policy",
        r#"    <h1>Privacy Policy</h1>
    <p>We store the files you upload in private object storage and use them
    only to examine your item.</p>
    <p>Verification lookups are anonymous. We do not place tracking cookies.</p>
    <p>Contact us to have your uploads deleted.</p>"#,
    )
}
