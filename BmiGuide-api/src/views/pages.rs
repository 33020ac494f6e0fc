use bmi_guide_domain::entities::{BmiResult, ADVISORY_MAX_WEIGHT_KG, MAX_HEIGHT_M, MIN_HEIGHT_M};

use super::html_template;

/// Home page with the measurement form and the category scale
pub fn home_page() -> String {
    let content = format!(
        r#"        <h1>📊 BMI Calculator</h1>
        <form id="bmi-form" action="/calculate-bmi" method="POST" onsubmit="return validateForm()"
              data-min-height="{MIN_HEIGHT_M}" data-max-height="{MAX_HEIGHT_M}" data-max-weight="{ADVISORY_MAX_WEIGHT_KG}">
            <div class="form-group">
                <label for="weight">Weight (kg):</label>
                <input type="number" id="weight" name="weight" required
                       min="0" step="0.1" placeholder="e.g., 70.5">
            </div>

            <div class="form-group">
                <label for="height">Height (m):</label>
                <input type="number" id="height" name="height" required
                       min="{MIN_HEIGHT_M}" max="{MAX_HEIGHT_M}" step="0.01" placeholder="e.g., 1.75">
            </div>

            <button type="submit" class="btn">Calculate BMI</button>
        </form>

        <div class="bmi-scale">
            <h3>📈 BMI Categories:</h3>
            <div class="scale-item"><span>Underweight</span><span>&lt; 18.5</span></div>
            <div class="scale-item"><span>Normal weight</span><span>18.5 – 24.9</span></div>
            <div class="scale-item"><span>Overweight</span><span>25 – 29.9</span></div>
            <div class="scale-item"><span>Obesity</span><span>≥ 30</span></div>
        </div>

        <div class="footer">
            BMI = weight (kg) / [height (m)]²
        </div>"#
    );

    html_template("BMI Calculator", &content)
}

/// Result page for a computed BMI
pub fn result_page(result: &BmiResult) -> String {
    let bmi = format!("{:.1}", result.value);
    let weight = result.weight_kg;
    let height = result.height_m;

    let content = format!(
        r#"        <h1>📊 Your BMI Result</h1>

        <div class="result-box {css_class}">
            <div class="bmi-value">{bmi}</div>
            <div class="bmi-category">{label}</div>
        </div>

        <div class="measurements">
            <p><strong>Weight:</strong> {weight} kg</p>
            <p><strong>Height:</strong> {height} m</p>
            <p><strong>Formula:</strong> {weight} ÷ ({height} × {height}) = {bmi}</p>
        </div>

        <div class="recommendation">
            <h3>💡 Recommendation:</h3>
            <p>{recommendation}</p>
        </div>

        <div>
            <a href="/" class="btn">Calculate Another BMI</a>
        </div>

        <div class="footer">
            Note: BMI is a screening tool, not a diagnostic measure. Consult a healthcare professional for personalized advice.
        </div>"#,
        css_class = result.category.css_class(),
        label = result.category.label(),
        recommendation = result.recommendation,
    );

    html_template("BMI Result", &content)
}

/// Error page shown when the submitted values are rejected
///
/// `reason` comes from the validator and never contains submitted text.
pub fn error_page(reason: &str) -> String {
    let content = format!(
        r#"        <div class="error-message">
            <h2>⚠️ Invalid Input</h2>
            <p class="error-reason">{reason}</p>
            <p>Please enter valid positive numbers:</p>
            <p>• Weight: 0.1 to {ADVISORY_MAX_WEIGHT_KG} kg</p>
            <p>• Height: {MIN_HEIGHT_M} to {MAX_HEIGHT_M} meters</p>
        </div>
        <a href="/" class="btn">Try Again</a>"#
    );

    html_template("Error - BMI Calculator", &content)
}
