pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sales Pacing</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2f6;
      --bg-2: #d7e3ee;
      --ink: #1f2a33;
      --muted: #5b6b78;
      --accent: #2f4858;
      --ok: #d8f3dc;
      --warn: #ffe8b3;
      --crit: #ffd6d1;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 48px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 28px 18px 48px;
    }

    header {
      max-width: 1100px;
      margin: 0 auto 24px;
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
      flex-wrap: wrap;
    }

    h1 {
      font-family: "Fraunces", serif;
      margin: 0;
    }

    main {
      max-width: 1100px;
      margin: 0 auto;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 20px;
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 22px;
    }

    .card h2 {
      margin: 0 0 14px;
      font-size: 1.1rem;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 10px;
    }

    .stat {
      border-radius: 16px;
      padding: 12px 14px;
      background: #fff;
    }

    .stat[data-status="on_pace"] { background: var(--ok); }
    .stat[data-status="warning"] { background: var(--warn); }
    .stat[data-status="critical"] { background: var(--crit); }

    .stat .label { color: var(--muted); font-size: 0.85rem; }
    .stat .value { font-size: 1.5rem; font-weight: 600; }
    .stat .sub { color: var(--muted); font-size: 0.75rem; }

    label {
      display: flex;
      flex-direction: column;
      font-size: 0.85rem;
      gap: 4px;
    }

    input, select {
      font: inherit;
      padding: 6px 8px;
      border-radius: 10px;
      border: 1px solid #c9d4dd;
    }

    button {
      font: inherit;
      margin-top: 12px;
      padding: 8px 16px;
      border: none;
      border-radius: 12px;
      background: var(--accent);
      color: #fff;
      cursor: pointer;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th, td {
      text-align: left;
      padding: 6px 4px;
      border-bottom: 1px solid #e3e9ee;
    }

    #status {
      min-height: 1.2em;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <header>
    <div>
      <h1>Sales Pacing</h1>
      <div id="date">{{DATE}}</div>
    </div>
    <div>
      <select id="member"></select>
      <button id="add-member" type="button">+ member</button>
    </div>
  </header>

  <main>
    <section class="card">
      <h2>Week to date</h2>
      <div class="grid" id="pace"></div>
      <p id="status"></p>
    </section>

    <section class="card">
      <h2>Month to date</h2>
      <div class="grid" id="month"></div>
    </section>

    <section class="card">
      <h2>Morning plan</h2>
      <form id="plan-form" class="grid">
        <label>Presentations assigned<input type="number" min="0" name="presentations_assigned" value="0" /></label>
        <label>To confirm<input type="number" min="0" name="presentations_confirmed" value="0" /></label>
        <label>Payments expected<input type="number" min="0" name="payments_expected" value="0" /></label>
      </form>
      <button id="save-plan" type="button">Save plan</button>
    </section>

    <section class="card">
      <h2>Evening actuals</h2>
      <form id="actuals-form" class="grid">
        <label>Assigned<input type="number" min="0" name="presentations_assigned" value="0" /></label>
        <label>Confirmed<input type="number" min="0" name="presentations_confirmed" value="0" /></label>
        <label>Conducted<input type="number" min="0" name="presentations_conducted" value="0" /></label>
        <label>Invoices issued<input type="number" min="0" name="invoices_issued" value="0" /></label>
        <label>Payments received<input type="number" min="0" name="payments_received" value="0" /></label>
        <label>Call minutes<input type="number" min="0" name="call_minutes" value="0" /></label>
        <label>Presentation minutes<input type="number" min="0" name="presentation_minutes" value="0" /></label>
        <label>Dials<input type="number" min="0" name="dials" value="0" /></label>
      </form>
      <button id="save-actuals" type="button">Save actuals</button>
    </section>

    <section class="card">
      <h2>This week by day</h2>
      <table>
        <thead><tr><th>Day</th><th>Presentations</th><th>Dials</th><th>Minutes</th></tr></thead>
        <tbody id="week"></tbody>
      </table>
    </section>

    <section class="card">
      <h2>Leaderboard</h2>
      <table>
        <thead><tr><th>#</th><th>Member</th><th>Pres.</th><th>Payments</th><th>Dials</th><th>Minutes</th></tr></thead>
        <tbody id="leaderboard"></tbody>
      </table>
    </section>

    <section class="card">
      <h2>Targets</h2>
      <form id="targets-form" class="grid">
        <label>Presentations / day<input type="number" min="0" name="daily_presentations_target" /></label>
        <label>Dials / day<input type="number" min="0" name="daily_dials_target" /></label>
        <label>Minutes / day<input type="number" min="0" name="daily_activity_minutes_target" /></label>
        <label>Invoices / month<input type="number" min="0" name="monthly_invoices_target" /></label>
      </form>
      <button id="save-targets" type="button">Save targets</button>
    </section>
  </main>

  <script>
    const memberEl = document.getElementById('member');
    const statusEl = document.getElementById('status');
    let selected = null;

    const escapeHtml = (value) =>
      String(value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;')
        .replace(/'/g, '&#39;');

    const formValues = (id) => {
      const values = {};
      new FormData(document.getElementById(id)).forEach((value, key) => {
        values[key] = Math.max(0, parseInt(value, 10) || 0);
      });
      return values;
    };

    const request = async (url, method, body) => {
      const response = await fetch(url, {
        method: method || 'GET',
        headers: { 'Content-Type': 'application/json' },
        body: body ? JSON.stringify(body) : undefined
      });
      if (!response.ok) {
        const text = await response.text();
        throw new Error(text || response.statusText);
      }
      return response.json();
    };

    const stat = (label, value, sub, status) =>
      `<div class="stat" data-status="${status || ''}">
        <div class="label">${escapeHtml(label)}</div>
        <div class="value">${escapeHtml(value)}</div>
        <div class="sub">${escapeHtml(sub || '')}</div>
      </div>`;

    const paceStat = (label, pace) =>
      stat(
        label,
        `${pace.actual} / ${pace.target}`,
        `run-rate ${(pace.run_rate * 100).toFixed(0)}% · deficit ${pace.deficit} · need ${pace.required_per_day}/day`,
        pace.status
      );

    const render = (data) => {
      selected = data.member;
      memberEl.replaceChildren(
        ...data.members.map((name) => new Option(name, name, false, name === data.member))
      );

      const p = data.pacing;
      document.getElementById('pace').innerHTML = [
        paceStat('Presentations', p.presentations),
        paceStat('Dials', p.dials),
        paceStat('Minutes', p.minutes),
        paceStat('Invoices (month)', p.invoices)
      ].join('');
      statusEl.textContent =
        data.workdays.week_remaining === 0 && p.presentations.deficit > 0
          ? 'No workdays left to close this week.'
          : `${data.workdays.week_to_date} workdays elapsed, ${data.workdays.week_remaining} remaining.`;

      document.getElementById('month').innerHTML = [
        stat('Invoices', p.invoices_mtd),
        stat('Payments', p.payments_mtd),
        stat('Pushlist', p.pushlist, 'issued, not yet paid')
      ].join('');

      document.getElementById('week').innerHTML = data.week_days
        .map((day) => `<tr><td>${day.weekday} ${day.date.slice(5)}</td><td>${day.presentations}</td><td>${day.dials}</td><td>${day.minutes}</td></tr>`)
        .join('');

      document.getElementById('leaderboard').innerHTML = data.leaderboard
        .map((row, index) => `<tr><td>${index + 1}</td><td>${escapeHtml(row.member)}</td><td>${row.presentations}</td><td>${row.payments}</td><td>${row.dials}</td><td>${row.minutes}</td></tr>`)
        .join('');

      const targetsForm = document.getElementById('targets-form');
      Object.entries(data.targets).forEach(([key, value]) => {
        targetsForm.elements[key].value = value;
      });
    };

    const refresh = async () => {
      const query = selected ? `?member=${encodeURIComponent(selected)}` : '';
      try {
        render(await request(`/api/dashboard${query}`));
      } catch (err) {
        statusEl.textContent = err.message;
      }
    };

    memberEl.addEventListener('change', () => {
      selected = memberEl.value;
      refresh();
    });

    document.getElementById('add-member').addEventListener('click', async () => {
      const name = prompt('New member name');
      if (!name) {
        return;
      }
      await request('/api/roster', 'POST', { name });
      selected = name.trim();
      refresh();
    });

    document.getElementById('save-plan').addEventListener('click', async () => {
      await request('/api/plan', 'POST', { member: selected, ...formValues('plan-form') });
      refresh();
    });

    document.getElementById('save-actuals').addEventListener('click', async () => {
      const result = await request('/api/actuals', 'POST', { member: selected, ...formValues('actuals-form') });
      await refresh();
      if (result.invoice_goal_met) {
        statusEl.textContent = 'Monthly invoice pace reached!';
      }
    });

    document.getElementById('save-targets').addEventListener('click', async () => {
      await request('/api/targets', 'PUT', formValues('targets-form'));
      refresh();
    });

    refresh();
  </script>
</body>
</html>
"#;
