/*!
# `UNTIL <expression>`

## Purpose
Closes the innermost `REPEAT` loop.

## Remarks
When the expression is zero, execution goes back to the statement
after `REPEAT`. Otherwise the loop ends.

## Example
```text
10 REPEAT
20 INPUT "GUESS? ", G
30 UNTIL G=7
40 PRINT "RIGHT"
```

*/
