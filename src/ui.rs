use crate::html::escape_html;

/// The meal page; `known_meals` seed the input placeholder and the
/// in-page suggestion filter.
pub fn render_index(known_meals: &[&str]) -> String {
    let hint = known_meals
        .iter()
        .take(3)
        .map(|meal| escape_html(meal))
        .collect::<Vec<_>>()
        .join(", ");
    let meals = serde_json::to_string(known_meals)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");
    INDEX_HTML
        .replace("{{HINT}}", &hint)
        .replace("{{MEALS}}", &meals)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Meal Analyzer</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f1f8f2;
      --bg-2: #c9ead3;
      --ink: #22302a;
      --accent: #10b981;
      --accent-2: #2f4858;
      --danger: #dc2626;
      --warn: #b45309;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f5e9 60%, #f6faf5 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f6b64;
    }

    #meal-input {
      position: relative;
      display: flex;
      gap: 12px;
    }

    #mealInput {
      flex: 1;
      font: inherit;
      padding: 14px 16px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button {
      font: inherit;
      font-weight: 600;
      border: none;
      border-radius: 14px;
      padding: 14px 20px;
      cursor: pointer;
      color: white;
      background: var(--accent);
    }

    #mealSuggestions {
      position: absolute;
      top: 100%;
      left: 0;
      width: 66%;
      margin-top: 4px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.15);
      border-radius: 10px;
      z-index: 50;
    }

    #mealSuggestions div {
      padding: 6px 12px;
      cursor: pointer;
    }

    #mealSuggestions div:hover {
      background: #f1f5f9;
    }

    .results {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 20px;
    }

    .panel {
      background: white;
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .notice.warning {
      color: var(--warn);
      font-weight: 600;
    }

    .notice.error {
      color: var(--danger);
      font-weight: 600;
    }

    .missing {
      color: #8b857d;
    }

    .hidden {
      display: none;
    }

    .breakdown {
      margin-top: 16px;
      max-height: 24rem;
      overflow: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th, td {
      padding: 8px 12px;
      text-align: center;
      border-bottom: 1px solid #e5e7eb;
    }

    th:first-child, td:first-child {
      text-align: left;
    }

    #foodDetails {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
      gap: 14px;
    }

    .food-card {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(16, 185, 129, 0.25);
    }

    .food-card h4 {
      margin: 0 0 8px;
      text-transform: capitalize;
    }

    .food-card p {
      margin: 2px 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Meal Analyzer</h1>
      <p class="subtitle">List what you ate, separated by commas.</p>
    </header>
    <section id="meal-input">
      <input id="mealInput" type="text" autocomplete="off" placeholder="e.g. {{HINT}}" />
      <button id="analyze-btn" type="button">Analyze</button>
    </section>
    <section class="results">
      <div class="panel" id="summary"></div>
      <div class="panel" id="suggestions"></div>
      <div class="panel" id="macroChart"></div>
      <div class="panel" id="microChart"></div>
    </section>
    <section id="foodDetails"></section>
  </main>
  <script>
    const inputEl = document.getElementById('mealInput');
    const inputWrap = document.getElementById('meal-input');
    const summaryEl = document.getElementById('summary');
    const regionIds = ['summary', 'suggestions', 'macroChart', 'microChart', 'foodDetails'];
    const knownMeals = {{MEALS}};
    let suggestionBox = null;
    let analyzeGeneration = 0;

    const ensureSuggestionBox = () => {
      if (!suggestionBox) {
        suggestionBox = document.createElement('div');
        suggestionBox.id = 'mealSuggestions';
        inputWrap.appendChild(suggestionBox);
        suggestionBox.addEventListener('click', (event) => {
          const item = event.target.closest('[data-index]');
          if (!item) {
            return;
          }
          inputEl.value = item.textContent;
          suggestionBox.innerHTML = '';
        });
      }
      return suggestionBox;
    };

    const showSuggestions = (matches) => {
      const box = ensureSuggestionBox();
      box.replaceChildren(...matches.map((meal, index) => {
        const item = document.createElement('div');
        item.dataset.index = String(index);
        item.textContent = meal;
        return item;
      }));
    };

    const filterMeals = (input) => {
      const prefix = input.toLowerCase();
      return knownMeals.filter((meal) => meal.toLowerCase().startsWith(prefix));
    };

    inputEl.addEventListener('input', () => {
      showSuggestions(filterMeals(inputEl.value));
    });

    const setNotice = (text, type) => {
      summaryEl.innerHTML = '';
      const p = document.createElement('p');
      p.className = `notice ${type}`;
      p.textContent = text;
      summaryEl.appendChild(p);
    };

    const analyzeMeal = async () => {
      const meal = inputEl.value.trim();
      if (!meal) {
        setNotice('⚠️ Please enter a meal before analyzing.', 'warning');
        return;
      }

      const generation = ++analyzeGeneration;
      regionIds.forEach((id) => {
        document.getElementById(id).innerHTML = '';
      });
      setNotice('⏳ Analyzing your meal...', '');

      try {
        const res = await fetch('/view/analyze', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ meal })
        });
        if (generation !== analyzeGeneration) {
          return;
        }
        if (!res.ok) {
          throw new Error('Failed to fetch results');
        }
        const view = await res.json();
        if (generation !== analyzeGeneration) {
          return;
        }
        Object.entries(view.regions).forEach(([id, html]) => {
          document.getElementById(id).innerHTML = html;
        });
        Object.entries(view.charts).forEach(([id, spec]) => {
          Plotly.newPlot(id, spec.data, spec.layout);
        });
      } catch (err) {
        if (generation === analyzeGeneration) {
          setNotice(`❌ Error: ${err.message}`, 'error');
        }
      }
    };

    summaryEl.addEventListener('click', (event) => {
      if (!event.target.closest('[data-action="toggle-breakdown"]')) {
        return;
      }
      const box = document.getElementById('breakdownBox');
      if (box) {
        box.classList.toggle('hidden');
      }
    });

    document.getElementById('analyze-btn').addEventListener('click', () => {
      analyzeMeal();
    });
    inputEl.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        analyzeMeal();
      }
    });
  </script>
</body>
</html>
"#;
