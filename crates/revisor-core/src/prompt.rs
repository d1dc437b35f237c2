//! Instruction text sent to generative models

/// Build the review prompt for `code`, targeting `framework`.
///
/// The label is embedded verbatim, so unknown frameworks are passed through
/// unchanged. Callers are expected to reject empty code beforehand.
pub fn build_prompt(code: &str, framework: &str) -> String {
    format!(
        "Atue como um revisor de código especialista em {framework}. Analise o código e retorne uma análise em JSON sem formatação markdown.\n\
         \n\
         CÓDIGO PARA ANÁLISE:\n\
         {code}\n\
         \n\
         IMPORTANTE: Primeiro verifique o framework do código. RETORNE apenas um objeto JSON simples com esta estrutura exata (sem blocos de código ou markdown):\n\
         \n\
         Se o código NÃO for do framework {framework}, retorne APENAS este JSON:\n\
         {{\n\
           \"quality\": \"Este código não é do {framework}\",\n\
           \"recommendations\": [\"Este código parece ser de outro framework ou tecnologia\"],\n\
           \"improvedCode\": \"\",\n\
           \"performance\": [],\n\
           \"security\": [],\n\
           \"bestPractices\": [],\n\
           \"frameworkMismatch\": true\n\
         }}\n\
         \n\
         Se o código FOR do framework {framework}, sua resposta deve ser um objeto JSON com a seguinte estrutura exata (sem blocos de código ou markdown):\n\
         {{\n\
           \"quality\": \"Descrição da qualidade do código\",\n\
           \"recommendations\": [\"Recomendação 1\", \"Recomendação 2\"],\n\
           \"improvedCode\": \"Código melhorado com escapes apropriados\",\n\
           \"performance\": [\"Sugestão 1\", \"Sugestão 2\"],\n\
           \"security\": [\"Segurança 1\", \"Segurança 2\"],\n\
           \"bestPractices\": [\"Prática 1\", \"Prática 2\"],\n\
           \"frameworkMismatch\": false\n\
         }}\n\
         \n\
         REGRAS:\n\
         1. NÃO use blocos de código markdown nem o símbolo de CRASE\n\
         2. Use apenas aspas duplas\n\
         3. Escape caracteres especiais\n\
         4. NÃO inclua explicações antes ou depois do JSON\n\
         \n\
         Se perguntado sobre algo que não está no código, explique educadamente que você só pode fornecer informações sobre a análise."
    )
}
